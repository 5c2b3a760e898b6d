use super::SEPARATOR;
use super::scan::{Element, ElementKind};

/// Restores separator hygiene after elements have been removed:
/// runs of separators collapse to their first member, leading separators
/// are dropped, and the content always ends with exactly one separator.
pub(super) fn tidy_separators<'a>(elements: Vec<Element<'a>>) -> Vec<Element<'a>> {
    let mut tidy: Vec<Element<'a>> = Vec::with_capacity(elements.len() + 1);
    for element in elements {
        if element.is_separator() && tidy.last().is_none_or(Element::is_separator) {
            continue;
        }
        tidy.push(element);
    }

    if let Some(last) = tidy.last()
        && !last.is_separator()
    {
        let indent = last.indent;
        tidy.push(Element {
            kind: ElementKind::Separator,
            indent,
            text: SEPARATOR,
        });
    }
    tidy
}
