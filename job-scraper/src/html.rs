use scraper::{ElementRef, Selector};

/// Elements below `scope` matching `selector`, in document order.
pub(crate) fn descendants<'a: 'b, 'b>(
    scope: ElementRef<'a>,
    selector: &'b Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'b {
    let id = scope.id();
    scope.select(selector).filter(move |el| el.id() != id)
}

pub(crate) fn first_descendant<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    descendants(scope, selector).next()
}

/// First match of the first selector in `preference` that matches anything.
pub(crate) fn first_by_preference<'a>(
    scope: ElementRef<'a>,
    preference: &[Selector],
) -> Option<ElementRef<'a>> {
    preference
        .iter()
        .find_map(|selector| first_descendant(scope, selector))
}

pub(crate) fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// Trimmed text, `None` when the element holds only whitespace.
pub(crate) fn non_empty_text(el: ElementRef) -> Option<String> {
    Some(text_of(el)).filter(|text| !text.is_empty())
}

pub(crate) fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_descendants_excludes_scope() {
        let doc = Html::parse_fragment(r#"<div class="job"><div class="job">inner</div></div>"#);
        let selector = Selector::parse("div.job").unwrap();
        let outer = doc.select(&selector).next().unwrap();
        let inner: Vec<_> = descendants(outer, &selector).map(text_of).collect();
        assert_eq!(inner, vec!["inner"]);
    }

    #[test]
    fn test_first_by_preference_honours_order() {
        let doc = Html::parse_fragment(
            r#"<div id="root"><span class="title">Span title</span><h3>Heading</h3></div>"#,
        );
        let root = doc.select(&Selector::parse("#root").unwrap()).next().unwrap();
        let preference = [
            Selector::parse("h3").unwrap(),
            Selector::parse(".title").unwrap(),
        ];
        let found = first_by_preference(root, &preference).map(text_of);
        assert_eq!(found.as_deref(), Some("Heading"));
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace() {
        let doc = Html::parse_fragment("<h2>   \n </h2>");
        let h2 = doc.select(&Selector::parse("h2").unwrap()).next().unwrap();
        assert_eq!(non_empty_text(h2), None);
    }
}
