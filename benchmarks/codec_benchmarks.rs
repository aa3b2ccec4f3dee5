#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Codec benchmarks: qsedit vs url crate for query decoding, plus escaping
/// and recomposition on a typical video ad tag
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qsedit::{Action, Editor, compose, escape, parse};

const AD_TAG: &str = "https://pubads.example/gampad/ads?iu=/21775744923/external/single_ad_samples\
    &sz=640x480&cust_params=sample_ct%3Dlinear&ciu_szs=300x250%2C728x90&gdfp_req=1\
    &output=vast&unviewed_position_start=1&env=vp&impl=s&correlator=&gdpr=1\
    &gdpr_consent=CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA&url=https%3A%2F%2Fexample.com%2Fwatch%3Fv%3D1";

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ad_tag");
    let query = AD_TAG.split_once('?').map(|(_, q)| q).unwrap();

    group.bench_function("qsedit", |b| {
        b.iter(|| parse(black_box(AD_TAG)));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(query).as_bytes())
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");
    let clean = "CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA";
    let dirty = "https://example.com/watch?v=1&list=a b";

    group.bench_function("clean", |b| {
        b.iter(|| escape(black_box(clean)));
    });

    group.bench_function("dirty", |b| {
        b.iter(|| escape(black_box(dirty)));
    });

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let parsed = parse(AD_TAG);

    c.bench_function("compose_ad_tag", |b| {
        b.iter(|| compose(black_box(&parsed.base_path), black_box(&parsed.records)));
    });
}

fn bench_editor_session(c: &mut Criterion) {
    c.bench_function("editor_session", |b| {
        b.iter(|| {
            let mut editor = Editor::from_url(black_box(AD_TAG));
            editor
                .dispatch_all([
                    Action::ToggleSelected(9),
                    Action::AddSuggestion("vpmute".to_string()),
                    Action::Remove(0),
                    Action::Compose,
                ])
                .unwrap();
            editor
        });
    });
}

criterion_group!(
    benches,
    bench_parse_all,
    bench_escape,
    bench_compose,
    bench_editor_session
);

criterion_main!(benches);
