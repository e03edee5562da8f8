use crate::i18n::t;
use storefront_core::CategorySelection;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub options: Vec<CategorySelection>,
    pub selected: CategorySelection,
    pub on_select: Callback<CategorySelection>,
}

fn option_label(option: &CategorySelection) -> String {
    match option {
        CategorySelection::All => t("categories.all"),
        CategorySelection::Named(label) => label.clone(),
    }
}

#[function_component(CategoryBar)]
pub fn category_bar(p: &Props) -> Html {
    html! {
        <nav class="category-bar" aria-label={t("categories.label")}>
            { for p.options.iter().map(|option| {
                let active = *option == p.selected;
                let onclick = {
                    let cb = p.on_select.clone();
                    let option = option.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(option.clone()))
                };
                html! {
                    <button
                        key={option.label().to_string()}
                        type="button"
                        class={classes!("category-button", active.then_some("active"))}
                        aria-pressed={active.to_string()}
                        data-testid="category-button"
                        {onclick}>
                        { option_label(option) }
                    </button>
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::i18n::set_lang;
    use futures::executor::block_on;
    use storefront_core::category_options;
    use yew::LocalServerRenderer;

    fn render(selected: CategorySelection) -> String {
        let props = Props {
            options: category_options(catalog()),
            selected,
            on_select: Callback::noop(),
        };
        block_on(LocalServerRenderer::<CategoryBar>::with_props(props).render())
    }

    #[test]
    fn renders_all_sentinel_plus_catalog_categories() {
        set_lang("ar");
        let html = render(CategorySelection::All);
        assert_eq!(html.matches("data-testid=\"category-button\"").count(), 6);
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert!(html.contains("دورات تعليمية"));
    }

    #[test]
    fn unknown_selection_highlights_nothing() {
        set_lang("ar");
        let html = render(CategorySelection::parse("ألعاب"));
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 0);
    }

    #[test]
    fn sentinel_is_translated() {
        set_lang("en");
        assert_eq!(option_label(&CategorySelection::All), "All");
        set_lang("ar");
        assert_eq!(option_label(&CategorySelection::All), "الكل");
    }
}
