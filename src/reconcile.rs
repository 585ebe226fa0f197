//! Rebuilding a text from the fragments of a split

/// Fragments produced per occurrence when splitting on a separator line
pub const SEPARATOR_ARITY: usize = 3;

/// Fragments produced per occurrence when splitting on a label line
pub const LABEL_ARITY: usize = 4;

/// Concatenate the `keep` fragments in order, then every fragment from
/// `arity` onward unless `exclude` rejects its index.
///
/// Indices in `keep` past the end of `fragments` are ignored.
#[must_use]
pub fn reconcile(
    fragments: &[String],
    arity: usize,
    keep: &[usize],
    exclude: Option<fn(usize) -> bool>,
) -> String {
    let kept = keep.iter().filter_map(|&index| fragments.get(index));
    let rest = fragments
        .iter()
        .enumerate()
        .skip(arity)
        .filter(|(index, _)| !exclude.is_some_and(|exclude| exclude(*index)))
        .map(|(_, fragment)| fragment);

    kept.chain(rest).map(String::as_str).collect()
}

/// Whether a fragment index holds the captured value of a label line
///
/// Label splits repeat `[text, line, value]`, so the value of every later
/// occurrence sits at `2 mod 3`.
#[must_use]
pub const fn is_field_value(index: usize) -> bool {
    index % 3 == 2
}
