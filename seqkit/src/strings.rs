use ahash::{HashMap, HashMapExt};
use regex::Regex;

use crate::error;

/// Make every string in `sequence` unique by appending `suffix` and an
/// occurrence count to repeated values.
///
/// The first occurrence of a value is kept as is; the k-th occurrence
/// becomes `{value}{suffix}{k}`. So `["hello", "hello", "hello"]` with suffix
/// `"_"` becomes `["hello", "hello_2", "hello_3"]`.
///
/// If any input already ends in `suffix` followed by digits, or `suffix`
/// itself ends in a digit, the output could contain the same string twice,
/// so this returns [`error::Error::InvalidArgument`] instead.
pub fn make_unique_strings<S: AsRef<str>>(
    sequence: &[S],
    suffix: &str,
) -> error::Result<Vec<String>> {
    // the count must be the only trailing digits of a numbered string
    if suffix.ends_with(|c: char| c.is_ascii_digit()) {
        tracing::debug!(suffix, "refusing to uniquify: suffix ends in a digit");
        return Err(error::Error::InvalidArgument {
            value: suffix.to_string(),
            suffix: suffix.to_string(),
        });
    }

    let values = sequence.iter().map(AsRef::<str>::as_ref);

    let reserved = Regex::new(&format!("{}[0-9]+$", regex::escape(suffix)))?;
    if let Some(value) = values.clone().find(|value| reserved.is_match(value)) {
        tracing::debug!(
            value,
            suffix,
            "refusing to uniquify: value collides with suffix pattern"
        );
        return Err(error::Error::InvalidArgument {
            value: value.to_string(),
            suffix: suffix.to_string(),
        });
    }

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(sequence.len());
    let result = values
        .map(|value| {
            let count = counts.entry(value).or_insert(0);
            *count += 1;
            if *count == 1 {
                value.to_string()
            } else {
                format!("{value}{suffix}{count}")
            }
        })
        .collect();
    Ok(result)
}
