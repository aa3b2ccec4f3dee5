/// Split a URL at its first `?`
/// Returns (`base_path`, `query_without_question_mark`)
/// Later `?` characters stay in the query.
/// Optimization: Uses SIMD-accelerated memchr for fast '?' search
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}
