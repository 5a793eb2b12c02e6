/// The longest prefix shared by every string in `strings`.
///
/// Comparison is per character and case-sensitive. An empty input has an
/// empty stem; a single string is its own stem.
pub fn longest_common_stem<S: AsRef<str>>(strings: &[S]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };
    let first = first.as_ref();
    let mut end = first.len();
    for other in rest {
        let shared: usize = first
            .chars()
            .zip(other.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        end = end.min(shared);
        if end == 0 {
            break;
        }
    }
    first[..end].to_string()
}
