use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Input, Label, Spinner, Textarea,
};
use crate::models::Article;
use crate::state::{queries, AppContext};
use crate::validate::{validate_article, ArticleDraft, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// `datetime-local` inputs want `YYYY-MM-DDTHH:MM`.
fn datetime_local_value(published_at: &str) -> String {
    published_at.chars().take(16).collect()
}

/// Create/edit form. With `article` set it edits that record, otherwise it
/// creates a new one. Validation failures never reach the network; a failed
/// mutation keeps the form (and the user's input) on screen.
#[component]
pub(crate) fn ArticleForm(
    #[prop(optional_no_strip)] article: Option<Article>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let app = expect_context::<AppContext>();
    let editing_id = article.as_ref().map(|a| a.id);
    let is_editing = editing_id.is_some();

    let title = RwSignal::new(
        article
            .as_ref()
            .map(|a| a.title.clone())
            .unwrap_or_default(),
    );
    let content = RwSignal::new(
        article
            .as_ref()
            .map(|a| a.content.clone())
            .unwrap_or_default(),
    );
    let author = RwSignal::new(
        article
            .as_ref()
            .and_then(|a| a.author.clone())
            .unwrap_or_default(),
    );
    let category = RwSignal::new(
        article
            .as_ref()
            .and_then(|a| a.category.clone())
            .unwrap_or_default(),
    );
    let published_at = RwSignal::new(
        article
            .as_ref()
            .and_then(|a| a.published_at.as_deref())
            .map(datetime_local_value)
            .unwrap_or_default(),
    );

    let errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::default());
    let submit_error: RwSignal<Option<String>> = RwSignal::new(None);
    let saving: RwSignal<bool> = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if saving.get_untracked() {
            return;
        }

        let draft = ArticleDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            author: author.get_untracked(),
            category: category.get_untracked(),
            published_at: published_at.get_untracked(),
        };

        let input = match validate_article(&draft) {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        errors.set(FieldErrors::default());
        submit_error.set(None);
        saving.set(true);

        let app = app.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => queries::update_article(&app, id, &input).await.map(|_| ()),
                None => queries::create_article(&app, &input).await.map(|_| ()),
            };

            match result {
                // The cache was invalidated before we got here; closing the
                // overlay is now safe, re-reads see fresh data.
                Ok(()) => on_saved.run(()),
                Err(e) => submit_error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let field_error = move |msg: Option<String>| {
        msg.map(|m| view! { <p class="mt-1 text-xs text-destructive">{m}</p> })
    };

    view! {
        <form class="flex flex-col gap-4" on:submit=on_submit>
            <h2 class="text-xl font-bold">
                {if is_editing { "Edit article" } else { "New article" }}
            </h2>

            <div class="flex flex-col gap-1.5">
                <Label html_for="article-title" class="text-xs">
                    "Title" <span class="text-destructive">"*"</span>
                </Label>
                <Input
                    id="article-title"
                    placeholder="Article title"
                    bind_value=title
                    class="h-8 text-sm"
                />
                {move || field_error(errors.get().title)}
            </div>

            <div class="flex flex-col gap-1.5">
                <Label html_for="article-content" class="text-xs">
                    "Content" <span class="text-destructive">"*"</span>
                </Label>
                <Textarea
                    id="article-content"
                    rows=8
                    placeholder="Article body"
                    bind_value=content
                    class="text-sm"
                />
                {move || field_error(errors.get().content)}
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div class="flex flex-col gap-1.5">
                    <Label html_for="article-author" class="text-xs">"Author"</Label>
                    <Input
                        id="article-author"
                        placeholder="Author name"
                        bind_value=author
                        class="h-8 text-sm"
                    />
                    {move || field_error(errors.get().author)}
                </div>
                <div class="flex flex-col gap-1.5">
                    <Label html_for="article-category" class="text-xs">"Category"</Label>
                    <Input
                        id="article-category"
                        placeholder="e.g. Frontend, Backend"
                        bind_value=category
                        class="h-8 text-sm"
                    />
                    {move || field_error(errors.get().category)}
                </div>
            </div>

            <div class="flex flex-col gap-1.5">
                <Label html_for="article-published-at" class="text-xs">"Publish date"</Label>
                <Input
                    id="article-published-at"
                    r#type="datetime-local"
                    bind_value=published_at
                    class="h-8 text-sm"
                />
            </div>

            <Show when=move || submit_error.get().is_some() fallback=|| ().into_view()>
                {move || {
                    submit_error.get().map(|e| view! {
                        <Alert class="border-destructive/30">
                            <AlertDescription class="text-destructive text-xs">
                                {format!("Failed to save: {e}")}
                            </AlertDescription>
                        </Alert>
                    })
                }}
            </Show>

            <div class="flex justify-end gap-2 pt-2">
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    attr:r#type="button"
                    attr:disabled=move || saving.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    size=ButtonSize::Sm
                    attr:r#type="submit"
                    attr:disabled=move || saving.get()
                >
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || saving.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if is_editing {
                                "Update"
                            } else {
                                "Create"
                            }
                        }}
                    </span>
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_local_value_trims_seconds() {
        assert_eq!(
            datetime_local_value("2024-01-15T10:30:00"),
            "2024-01-15T10:30"
        );
        assert_eq!(datetime_local_value("2024-01-15T10:30"), "2024-01-15T10:30");
    }
}
