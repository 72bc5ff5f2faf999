use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use leptos::prelude::*;

/// One slot in the compressed page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Compresses the page range: first and last always show, as does
/// current ± 1; every other run collapses into a single ellipsis.
///
/// Empty when `total_pages <= 1` — a one-page list renders no control.
pub(crate) fn page_strip(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut items: Vec<PageItem> = Vec::new();
    for i in 1..=total_pages {
        let near_current = i + 1 >= current && i <= current + 1;
        if i == 1 || i == total_pages || near_current {
            items.push(PageItem::Page(i));
        } else if items.last() != Some(&PageItem::Ellipsis) {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 } fallback=|| ().into_view()>
            <nav class="flex items-center justify-center gap-1" aria-label="Pagination">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:disabled=move || current_page.get() <= 1
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                >
                    "Previous"
                </Button>

                {move || {
                    let current = current_page.get();
                    page_strip(current, total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Ellipsis => view! {
                                <span class="px-2 text-muted-foreground">"..."</span>
                            }
                            .into_any(),
                            PageItem::Page(page) => {
                                let variant = if page == current {
                                    ButtonVariant::Default
                                } else {
                                    ButtonVariant::Ghost
                                };
                                view! {
                                    <Button
                                        variant=variant
                                        size=ButtonSize::Sm
                                        attr:aria-current=(page == current).then_some("page")
                                        on:click=move |_| on_page_change.run(page)
                                    >
                                        {page.to_string()}
                                    </Button>
                                }
                                .into_any()
                            }
                        })
                        .collect_view()
                }}

                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page < total_pages.get_untracked() {
                            on_page_change.run(page + 1);
                        }
                    }
                >
                    "Next"
                </Button>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn single_page_renders_no_strip() {
        assert!(page_strip(1, 0).is_empty());
        assert!(page_strip(1, 1).is_empty());
    }

    #[test]
    fn middle_page_collapses_both_sides() {
        assert_eq!(
            page_strip(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn first_page_collapses_tail_only() {
        assert_eq!(page_strip(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn last_page_collapses_head_only() {
        assert_eq!(
            page_strip(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn short_ranges_have_no_ellipsis() {
        assert_eq!(page_strip(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_strip(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_strip(2, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn never_two_consecutive_ellipses() {
        for total in 2..=30u32 {
            for current in 1..=total {
                let strip = page_strip(current, total);
                for pair in strip.windows(2) {
                    assert!(
                        pair != [Ellipsis, Ellipsis],
                        "double ellipsis at current={current} total={total}"
                    );
                }
                // First and last pages always present.
                assert!(strip.contains(&Page(1)));
                assert!(strip.contains(&Page(total)));
            }
        }
    }
}
