use crate::cache::{ListQuery, QueryKey, QueryStatus};
use crate::components::article_form::ArticleForm;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Spinner,
};
use crate::models::{Article, ArticleListResponse};
use crate::state::nav::ListNav;
use crate::state::queries::{self, ADMIN_PER_PAGE, READER_PER_PAGE};
use crate::state::AppContext;
use crate::util::{content_preview, format_date};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

#[component]
fn CategoryFilter(
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
    let app = expect_context::<AppContext>();
    let cache = app.0.query_cache.clone();

    let chip_class = |active: bool| {
        if active {
            "rounded-full bg-primary px-4 py-1.5 text-sm font-medium text-primary-foreground"
        } else {
            "rounded-full bg-muted px-4 py-1.5 text-sm font-medium text-muted-foreground hover:bg-accent hover:text-accent-foreground"
        }
    };

    view! {
        <div class="flex flex-wrap gap-2">
            {move || {
                let snap = cache.snapshot(&QueryKey::Categories);

                if snap.data.is_none() && snap.status != QueryStatus::Failed {
                    // Loading skeleton.
                    return view! {
                        <div class="flex gap-2">
                            {(0..4)
                                .map(|_| view! {
                                    <div class="h-8 w-20 animate-pulse rounded-full bg-muted" />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any();
                }

                // A failed categories fetch degrades to the bare "All" chip;
                // the article list is where load errors are reported.
                let categories = snap
                    .data
                    .as_ref()
                    .and_then(|d| d.as_categories())
                    .map(|c| c.to_vec())
                    .unwrap_or_default();

                view! {
                    <button
                        class=chip_class(selected.get().is_none())
                        on:click=move |_| on_select.run(None)
                    >
                        "All"
                    </button>
                    {categories
                        .into_iter()
                        .map(|cat| {
                            let name = cat.name.clone();
                            let is_active = selected.get().as_deref() == Some(name.as_str());
                            view! {
                                <button
                                    class=chip_class(is_active)
                                    on:click=move |_| on_select.run(Some(name.clone()))
                                >
                                    {cat.name}
                                    <span class="ml-1.5 text-xs opacity-70">
                                        {cat.article_count.to_string()}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn ArticleCard(article: Article, #[prop(into)] on_select: Callback<Article>) -> impl IntoView {
    let date = format_date(article.display_date());
    let preview = content_preview(&article.content, 150);
    let category = article.category.clone();
    let author = article.author.clone();
    let title = article.title.clone();
    let label = format!("Read article \"{}\"", article.title);

    view! {
        <Card
            class="cursor-pointer text-left transition-colors hover:bg-accent/40 hover:ring-1 hover:ring-border"
            attr:role="button"
            attr:tabindex="0"
            attr:aria-label=label
            on:click=move |_| on_select.run(article.clone())
        >
            <CardHeader>
                <div class="flex items-center gap-2">
                    {category.map(|c| view! {
                        <span class="rounded-full bg-muted px-2.5 py-0.5 text-xs font-medium text-muted-foreground">
                            {c}
                        </span>
                    })}
                    <span class="text-xs text-muted-foreground">{date}</span>
                </div>
                <CardTitle class="text-lg">{title}</CardTitle>
            </CardHeader>
            <CardContent>
                <p class="mb-3 text-sm text-muted-foreground">{preview}</p>
                {author.map(|a| view! {
                    <p class="text-xs text-muted-foreground">"by " {a}</p>
                })}
            </CardContent>
        </Card>
    }
}

fn loading_placeholder() -> AnyView {
    view! {
        <div class="flex items-center justify-center py-12">
            <Spinner class="size-8" />
        </div>
    }
    .into_any()
}

fn status_message(text: &'static str) -> AnyView {
    view! { <div class="py-12 text-center text-muted-foreground">{text}</div> }.into_any()
}

/// Public article browser: category filter + paginated card grid + detail
/// overlay. Filter and page live in the URL query string.
#[component]
pub fn ReaderPage() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let query = use_query_map();
    let navigate = StoredValue::new(use_navigate());

    let nav_state = Memo::new(move |_| {
        let q = query.get();
        ListNav::from_parts(q.get("category"), q.get("page"))
    });

    let articles_key =
        Memo::new(move |_| QueryKey::Articles(nav_state.get().list_query(READER_PER_PAGE)));

    // Keep the cache fed: runs on navigation changes and again when a
    // mutation invalidates entries.
    {
        let app = app.clone();
        Effect::new(move |_| {
            app.0.query_cache.track();
            queries::ensure_query(&app, &articles_key.get());
            queries::ensure_query(&app, &QueryKey::Categories);
        });
    }

    let selected_article: RwSignal<Option<Article>> = RwSignal::new(None);

    let go = move |nav: ListNav| {
        navigate.with_value(|n| n(&format!("/{}", nav.to_query_string()), Default::default()));
    };
    let on_select_category = Callback::new(move |category: Option<String>| {
        go(nav_state.get_untracked().with_category(category));
    });
    let on_page_change = Callback::new(move |page: u32| {
        go(nav_state.get_untracked().with_page(page));
    });

    let cache = app.0.query_cache.clone();
    let on_select_article = Callback::new(move |a: Article| selected_article.set(Some(a)));

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <header class="border-b border-border">
                <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-4">
                    <h1 class="text-2xl font-bold">"TechInsight"</h1>
                    <a
                        href="/admin"
                        class="rounded px-3 py-1.5 text-sm hover:bg-accent hover:text-accent-foreground"
                    >
                        "Admin"
                    </a>
                </div>
            </header>

            <main class="mx-auto max-w-5xl px-4 py-8">
                <div class="mb-8">
                    <CategoryFilter
                        selected=Signal::derive(move || nav_state.get().category)
                        on_select=on_select_category
                    />
                </div>

                {move || {
                    let snap = cache.snapshot(&articles_key.get());
                    let list: Option<ArticleListResponse> = snap
                        .data
                        .as_ref()
                        .and_then(|d| d.as_articles())
                        .cloned();

                    if snap.status == QueryStatus::Failed {
                        return status_message(
                            "Failed to load articles. Check that the backend server is running.",
                        );
                    }

                    let Some(list) = list else {
                        return loading_placeholder();
                    };

                    // A successful response with zero records is an ordinary
                    // empty state, not an error (this also covers direct
                    // navigation to an out-of-range page).
                    if list.data.is_empty() {
                        return status_message("No articles found.");
                    }

                    let meta = list.meta.clone();
                    view! {
                        <div>
                            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                                {list
                                    .data
                                    .into_iter()
                                    .map(|article| view! {
                                        <ArticleCard article=article on_select=on_select_article />
                                    })
                                    .collect_view()}
                            </div>
                            <div class="mt-8">
                                <Pagination
                                    current_page=meta.page
                                    total_pages=meta.total_pages
                                    on_page_change=on_page_change
                                />
                            </div>
                        </div>
                    }
                    .into_any()
                }}
            </main>

            <Modal
                open=Signal::derive(move || selected_article.get().is_some())
                on_close=Callback::new(move |_| selected_article.set(None))
            >
                {move || {
                    selected_article.get().map(|article| {
                        let date = format_date(article.display_date());
                        view! {
                            <article class="pr-8">
                                <div class="mb-4 flex items-center gap-3">
                                    {article.category.clone().map(|c| view! {
                                        <span class="rounded-full bg-muted px-3 py-1 text-sm font-medium text-muted-foreground">
                                            {c}
                                        </span>
                                    })}
                                    <span class="text-sm text-muted-foreground">{date}</span>
                                </div>
                                <h2 class="mb-4 text-2xl font-bold">{article.title.clone()}</h2>
                                {article.author.clone().map(|a| view! {
                                    <p class="mb-6 text-sm text-muted-foreground">"by " {a}</p>
                                })}
                                <div class="whitespace-pre-wrap leading-relaxed">
                                    {article.content.clone()}
                                </div>
                            </article>
                        }
                    })
                }}
            </Modal>
        </div>
    }
}

/// Admin table with create/edit/delete. The page number is plain view state
/// here; only the reader list is URL-addressed.
#[component]
pub fn AdminPage() -> impl IntoView {
    let app = expect_context::<AppContext>();

    let current_page: RwSignal<u32> = RwSignal::new(1);
    let articles_key = Memo::new(move |_| {
        QueryKey::Articles(ListQuery::new(current_page.get(), ADMIN_PER_PAGE, None))
    });

    {
        let app = app.clone();
        Effect::new(move |_| {
            app.0.query_cache.track();
            queries::ensure_query(&app, &articles_key.get());
        });
    }

    // Create/edit overlay and delete confirmation are mutually exclusive by
    // construction: disjoint state fields, each driving its own <Modal>.
    let form_open: RwSignal<bool> = RwSignal::new(false);
    let editing: RwSignal<Option<Article>> = RwSignal::new(None);

    let delete_target: RwSignal<Option<Article>> = RwSignal::new(None);
    let delete_error: RwSignal<Option<String>> = RwSignal::new(None);
    let delete_pending: RwSignal<bool> = RwSignal::new(false);

    let open_create = move |_| {
        editing.set(None);
        form_open.set(true);
    };
    let open_edit = Callback::new(move |article: Article| {
        editing.set(Some(article));
        form_open.set(true);
    });
    let open_delete = Callback::new(move |article: Article| {
        delete_error.set(None);
        delete_target.set(Some(article));
    });

    let close_form = Callback::new(move |_: ()| {
        form_open.set(false);
        editing.set(None);
    });

    let confirm_delete = Callback::new({
        let app = app.clone();
        move |_: web_sys::MouseEvent| {
            if delete_pending.get_untracked() {
                return;
            }
            let Some(article) = delete_target.get_untracked() else {
                return;
            };

            delete_pending.set(true);
            delete_error.set(None);

            let app = app.clone();
            spawn_local(async move {
                match queries::delete_article(&app, article.id).await {
                    Ok(()) => delete_target.set(None),
                    Err(e) => delete_error.set(Some(e.to_string())),
                }
                delete_pending.set(false);
            });
        }
    });

    let cache = app.0.query_cache.clone();

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <header class="border-b border-border">
                <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-4">
                    <h1 class="text-2xl font-bold">
                        <a href="/">"TechInsight"</a>
                        <span class="ml-2 text-base font-normal text-muted-foreground">"Admin"</span>
                    </h1>
                    <a
                        href="/"
                        class="rounded px-3 py-1.5 text-sm hover:bg-accent hover:text-accent-foreground"
                    >
                        "Back to site"
                    </a>
                </div>
            </header>

            <main class="mx-auto max-w-5xl px-4 py-8">
                <div class="mb-6 flex items-center justify-between">
                    <h2 class="text-lg font-semibold">"Articles"</h2>
                    <Button size=ButtonSize::Sm on:click=open_create>
                        "New article"
                    </Button>
                </div>

                {move || {
                    let snap = cache.snapshot(&articles_key.get());
                    let list: Option<ArticleListResponse> = snap
                        .data
                        .as_ref()
                        .and_then(|d| d.as_articles())
                        .cloned();

                    if snap.status == QueryStatus::Failed {
                        return status_message("Failed to load articles.");
                    }

                    let Some(list) = list else {
                        return loading_placeholder();
                    };

                    if list.data.is_empty() {
                        return status_message("No articles yet.");
                    }

                    let meta = list.meta.clone();
                    view! {
                        <div>
                            <div class="overflow-x-auto rounded-lg border border-border">
                                <table class="w-full text-left text-sm">
                                    <thead class="border-b border-border bg-muted/50">
                                        <tr>
                                            <th class="px-4 py-3 font-medium">"ID"</th>
                                            <th class="px-4 py-3 font-medium">"Title"</th>
                                            <th class="px-4 py-3 font-medium">"Category"</th>
                                            <th class="px-4 py-3 font-medium">"Author"</th>
                                            <th class="px-4 py-3 font-medium">"Created"</th>
                                            <th class="px-4 py-3 font-medium">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .data
                                            .into_iter()
                                            .map(|article| {
                                                let edit_target = article.clone();
                                                let del_target = article.clone();
                                                view! {
                                                    <tr class="border-b border-border/60">
                                                        <td class="px-4 py-3 text-muted-foreground">
                                                            {article.id.to_string()}
                                                        </td>
                                                        <td class="px-4 py-3 font-medium">{article.title.clone()}</td>
                                                        <td class="px-4 py-3 text-muted-foreground">
                                                            {article.category.clone().unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td class="px-4 py-3 text-muted-foreground">
                                                            {article.author.clone().unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td class="px-4 py-3 text-muted-foreground">
                                                            {format_date(&article.created_at)}
                                                        </td>
                                                        <td class="px-4 py-3">
                                                            <div class="flex gap-2">
                                                                <Button
                                                                    variant=ButtonVariant::Ghost
                                                                    size=ButtonSize::Sm
                                                                    on:click=move |_| open_edit.run(edit_target.clone())
                                                                >
                                                                    "Edit"
                                                                </Button>
                                                                <Button
                                                                    variant=ButtonVariant::Ghost
                                                                    size=ButtonSize::Sm
                                                                    class="text-destructive"
                                                                    on:click=move |_| open_delete.run(del_target.clone())
                                                                >
                                                                    "Delete"
                                                                </Button>
                                                            </div>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>

                            <div class="mt-6">
                                <Pagination
                                    current_page=meta.page
                                    total_pages=meta.total_pages
                                    on_page_change=Callback::new(move |page| current_page.set(page))
                                />
                            </div>
                        </div>
                    }
                    .into_any()
                }}
            </main>

            // Create/edit overlay
            <Modal open=form_open on_close=close_form>
                {move || {
                    view! {
                        <ArticleForm
                            article=editing.get_untracked()
                            on_saved=close_form
                            on_cancel=close_form
                        />
                    }
                }}
            </Modal>

            // Delete confirmation overlay
            <Modal
                open=Signal::derive(move || delete_target.get().is_some())
                on_close=Callback::new(move |_| delete_target.set(None))
            >
                {move || {
                    delete_target.get().map(|article| {
                        let title = article.title.clone();
                        view! {
                            <div class="pr-8">
                                <h2 class="mb-4 text-lg font-bold">"Delete article"</h2>
                                <p class="mb-6 text-sm text-muted-foreground">
                                    {format!("Delete \"{title}\"? This cannot be undone.")}
                                </p>
                                <Show when=move || delete_error.get().is_some() fallback=|| ().into_view()>
                                    {move || delete_error.get().map(|e| view! {
                                        <p class="mb-4 text-sm text-destructive">
                                            {format!("Failed to delete: {e}")}
                                        </p>
                                    })}
                                </Show>
                                <div class="flex justify-end gap-2">
                                    <Button
                                        variant=ButtonVariant::Outline
                                        size=ButtonSize::Sm
                                        attr:disabled=move || delete_pending.get()
                                        on:click=move |_| delete_target.set(None)
                                    >
                                        "Cancel"
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Destructive
                                        size=ButtonSize::Sm
                                        attr:disabled=move || delete_pending.get()
                                        on:click=move |ev| confirm_delete.run(ev)
                                    >
                                        <span class="inline-flex items-center gap-2">
                                            <Show when=move || delete_pending.get() fallback=|| ().into_view()>
                                                <Spinner />
                                            </Show>
                                            {move || if delete_pending.get() { "Deleting..." } else { "Delete" }}
                                        </span>
                                    </Button>
                                </div>
                            </div>
                        }
                    })
                }}
            </Modal>
        </div>
    }
}
