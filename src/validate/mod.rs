use crate::models::ArticleInput;

/// Raw article form fields, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub published_at: String,
}

/// Field-scoped validation messages. A `None` field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.category.is_none()
    }
}

pub(crate) const TITLE_MAX_CHARS: usize = 255;
pub(crate) const AUTHOR_MAX_CHARS: usize = 255;
pub(crate) const CATEGORY_MAX_CHARS: usize = 100;

/// Validates a draft and normalizes it into the wire payload.
///
/// Limits count Unicode scalar values, matching the backend's length rules.
/// Empty optional fields become absent (omitted from the JSON body), never
/// empty strings. `published_at` is passed through as a free-form timestamp
/// string; the server is the authority on its format.
pub(crate) fn validate_article(draft: &ArticleDraft) -> Result<ArticleInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.title.is_empty() {
        errors.title = Some("Title is required".to_string());
    } else if draft.title.chars().count() > TITLE_MAX_CHARS {
        errors.title = Some(format!("Title must be {TITLE_MAX_CHARS} characters or fewer"));
    }

    if draft.content.is_empty() {
        errors.content = Some("Content is required".to_string());
    }

    if draft.author.chars().count() > AUTHOR_MAX_CHARS {
        errors.author = Some(format!(
            "Author must be {AUTHOR_MAX_CHARS} characters or fewer"
        ));
    }

    if draft.category.chars().count() > CATEGORY_MAX_CHARS {
        errors.category = Some(format!(
            "Category must be {CATEGORY_MAX_CHARS} characters or fewer"
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let optional = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };

    Ok(ArticleInput {
        title: draft.title.clone(),
        content: draft.content.clone(),
        author: optional(&draft.author),
        category: optional(&draft.category),
        published_at: optional(&draft.published_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ArticleDraft {
        ArticleDraft {
            title: "Intro to Rust".into(),
            content: "body".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_title_is_rejected() {
        let draft = ArticleDraft {
            title: String::new(),
            ..valid_draft()
        };
        let errors = validate_article(&draft).expect_err("must fail");
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert!(errors.content.is_none());
    }

    #[test]
    fn title_at_255_chars_is_accepted() {
        let draft = ArticleDraft {
            title: "あ".repeat(255),
            ..valid_draft()
        };
        assert!(validate_article(&draft).is_ok());
    }

    #[test]
    fn title_at_256_chars_is_rejected() {
        let draft = ArticleDraft {
            title: "あ".repeat(256),
            ..valid_draft()
        };
        let errors = validate_article(&draft).expect_err("must fail");
        assert!(errors.title.is_some());
    }

    #[test]
    fn empty_content_is_rejected() {
        let draft = ArticleDraft {
            content: String::new(),
            ..valid_draft()
        };
        let errors = validate_article(&draft).expect_err("must fail");
        assert!(errors.content.is_some());
    }

    #[test]
    fn overlong_optional_fields_are_rejected() {
        let draft = ArticleDraft {
            author: "x".repeat(256),
            category: "y".repeat(101),
            ..valid_draft()
        };
        let errors = validate_article(&draft).expect_err("must fail");
        assert!(errors.author.is_some());
        assert!(errors.category.is_some());
    }

    #[test]
    fn errors_report_every_failing_field() {
        let draft = ArticleDraft::default();
        let errors = validate_article(&draft).expect_err("must fail");
        assert!(errors.title.is_some());
        assert!(errors.content.is_some());
    }

    #[test]
    fn empty_optionals_normalize_to_absent() {
        let input = validate_article(&valid_draft()).expect("valid");
        assert!(input.author.is_none());
        assert!(input.category.is_none());
        assert!(input.published_at.is_none());
    }

    #[test]
    fn set_optionals_are_kept() {
        let draft = ArticleDraft {
            author: "alice".into(),
            category: "Backend".into(),
            published_at: "2024-01-15T10:30".into(),
            ..valid_draft()
        };
        let input = validate_article(&draft).expect("valid");
        assert_eq!(input.author.as_deref(), Some("alice"));
        assert_eq!(input.category.as_deref(), Some("Backend"));
        assert_eq!(input.published_at.as_deref(), Some("2024-01-15T10:30"));
    }
}
