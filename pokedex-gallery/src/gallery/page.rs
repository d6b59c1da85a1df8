//! Full gallery document
//!
//! The fragments handed to the template are serialized by the document
//! model, which already escapes every text and attribute value, so they are
//! inserted with `|safe`. Rendering is a single pass: inserted content is
//! never re-read as template syntax.

use minijinja::{context, Environment};

use super::surface::{clear_filter_button, CardContainer, SearchForm};

const INDEX_HTML: &str = include_str!("../../ui/index.html");

/// Route the search form submits to
pub const SEARCH_ACTION: &str = "/search";
/// Route the clear-filter button submits to
pub const CLEAR_ACTION: &str = "/clear";

/// Fill the page template with the current form and cards
pub fn render_page(
    container: &CardContainer,
    form: &SearchForm,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_HTML)?;
    let template = env.get_template("index.html")?;

    template.render(context! {
        search_form => form.to_node(SEARCH_ACTION).to_html(),
        clear_filter_button => clear_filter_button(CLEAR_ACTION).to_html(),
        card_container => container.to_node().to_html(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::dom::Element;
    use crate::gallery::surface::DisplaySurface;

    #[test]
    fn test_page_has_all_attach_points() {
        let page = render_page(&CardContainer::default(), &SearchForm::default()).unwrap();

        assert!(page.contains(r#"class="search-form""#));
        assert!(page.contains(r#"class="clear-filter-button""#));
        assert!(page.contains(r#"class="card-container""#));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_template_syntax_in_phrase_is_echoed_verbatim() {
        let mut container = CardContainer::default();
        container.append(Element::new("div").class("card").text("X").into());
        let mut form = SearchForm::default();
        form.fill("{{card_container}}", "{{ clear_filter_button|safe }}");

        let page = render_page(&container, &form).unwrap();

        assert_eq!(page.matches(r#"class="card-container""#).count(), 1);
        assert_eq!(page.matches(r#"class="clear-filter-button""#).count(), 1);
        assert!(page.contains(r#"name="phrase" placeholder="Search by name or type" value="{{card_container}}""#));
        assert!(page.contains(r#"value="{{ clear_filter_button|safe }}""#));
    }

    #[test]
    fn test_markup_in_phrase_stays_escaped() {
        let mut form = SearchForm::default();
        form.fill("\"><script>alert(1)</script>", "");

        let page = render_page(&CardContainer::default(), &form).unwrap();

        assert!(!page.contains("<script>"));
        assert!(page.contains("value=\"&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;\""));
    }
}
