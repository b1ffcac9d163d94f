use crate::application::{
    error::{ApplicationError, ApplicationResult},
    validation::form::{first_violation, non_empty_text, positive_ids, required_text},
};
use crate::domain::news::NewsWithCategories;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const NO_FIELDS_TO_UPDATE: &str =
    "body must contain at least one field to update (Title, Content, or Categories)";

/// Body of `POST /create`. Lowercase keys are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct NewsCreateForm {
    #[serde(default, alias = "title")]
    #[validate(custom(function = required_text), length(max = 255))]
    #[schema(example = "Amazing news", min_length = 1, max_length = 255)]
    pub title: String,

    #[serde(default, alias = "content")]
    #[validate(custom(function = required_text))]
    #[schema(example = "This is really amazing news", min_length = 1)]
    pub content: String,

    /// Positive category ids, e.g. `[1, 2, 3]`.
    #[serde(default, alias = "categories", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = positive_ids))]
    pub categories: Option<Vec<i64>>,
}

impl NewsCreateForm {
    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_owned();
        self.content = self.content.trim().to_owned();
    }

    pub fn ensure_valid(&self) -> ApplicationResult<()> {
        Validate::validate(self).map_err(|errors| into_validation_error(&errors))
    }
}

/// Body of `POST /edit/{id}`. Omitted and `null` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct NewsEditForm {
    #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = non_empty_text), length(max = 255))]
    #[schema(min_length = 1, max_length = 255)]
    pub title: Option<String>,

    #[serde(default, alias = "content", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = non_empty_text))]
    #[schema(min_length = 1)]
    pub content: Option<String>,

    /// Full replacement list; `[]` removes every category link.
    #[serde(default, alias = "categories", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = positive_ids))]
    pub categories: Option<Vec<i64>>,
}

impl NewsEditForm {
    pub fn normalize(&mut self) {
        if let Some(title) = self.title.as_mut() {
            *title = title.trim().to_owned();
        }
        if let Some(content) = self.content.as_mut() {
            *content = content.trim().to_owned();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.categories.is_none()
    }

    pub fn ensure_valid(&self) -> ApplicationResult<()> {
        if self.is_empty() {
            return Err(ApplicationError::validation(NO_FIELDS_TO_UPDATE));
        }
        Validate::validate(self).map_err(|errors| into_validation_error(&errors))
    }
}

fn into_validation_error(errors: &validator::ValidationErrors) -> ApplicationError {
    ApplicationError::validation(
        first_violation(errors).unwrap_or_else(|| "validation failed".to_owned()),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct NewsWithCategoriesDto {
    #[schema(example = 1)]
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Empty when the record has no category links.
    pub categories: Vec<i64>,
}

impl From<NewsWithCategories> for NewsWithCategoriesDto {
    fn from(record: NewsWithCategories) -> Self {
        Self {
            id: record.news.id.into(),
            title: record.news.title,
            content: record.news.content,
            categories: record.categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form(title: &str, content: &str, categories: Option<Vec<i64>>) -> NewsCreateForm {
        NewsCreateForm {
            title: title.into(),
            content: content.into(),
            categories,
        }
    }

    fn check_create(mut form: NewsCreateForm) -> Result<(), String> {
        form.normalize();
        form.ensure_valid().map_err(|err| match err {
            ApplicationError::Validation(msg) => msg,
            other => panic!("unexpected error kind: {other:?}"),
        })
    }

    fn check_edit(mut form: NewsEditForm) -> Result<(), String> {
        form.normalize();
        form.ensure_valid().map_err(|err| match err {
            ApplicationError::Validation(msg) => msg,
            other => panic!("unexpected error kind: {other:?}"),
        })
    }

    #[test]
    fn create_form_accepts_valid_input() {
        assert_eq!(check_create(create_form("Title", "Content", None)), Ok(()));
        assert_eq!(
            check_create(create_form("Title", "Content", Some(vec![1, 2, 3]))),
            Ok(())
        );
        assert_eq!(check_create(create_form("Title", "Content", Some(vec![]))), Ok(()));
        assert_eq!(check_create(create_form(&"a".repeat(255), "c", None)), Ok(()));
    }

    #[test]
    fn create_form_reports_required_fields() {
        assert_eq!(
            check_create(create_form("", "Some Content", None)),
            Err("Title: field is required".into())
        );
        assert_eq!(
            check_create(create_form("   ", "Some Content", None)),
            Err("Title: field is required".into())
        );
        assert_eq!(
            check_create(create_form("Title", "", None)),
            Err("Content: field is required".into())
        );
        assert_eq!(
            check_create(create_form("", "", None)),
            Err("Title: field is required".into())
        );
    }

    #[test]
    fn create_form_enforces_title_length_after_trim() {
        assert_eq!(
            check_create(create_form(&"a".repeat(256), "Content", None)),
            Err("Title: maximum length is 255".into())
        );
        let padded = format!("  {}  ", "a".repeat(255));
        assert_eq!(check_create(create_form(&padded, "Content", None)), Ok(()));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        assert_eq!(check_create(create_form(&"é".repeat(255), "c", None)), Ok(()));
        assert_eq!(
            check_create(create_form(&"é".repeat(256), "c", None)),
            Err("Title: maximum length is 255".into())
        );
    }

    #[test]
    fn create_form_rejects_non_positive_categories() {
        assert_eq!(
            check_create(create_form("Title", "Content", Some(vec![1, 0, 3]))),
            Err("Categories[1]: must be greater than 0".into())
        );
    }

    #[test]
    fn create_rule_matches_trimmed_lengths() {
        let titles = ["", " ", "a", " a ", "\tnews\n"];
        let long = "x".repeat(300);
        let contents = ["", "  ", "body", " body "];
        let category_sets = [None, Some(vec![]), Some(vec![5]), Some(vec![2, -1])];

        for title in titles.iter().copied().chain([long.as_str()]) {
            for content in contents {
                for categories in &category_sets {
                    let form = create_form(title, content, categories.clone());
                    let title_len = title.trim().chars().count();
                    let should_fail = title_len == 0
                        || title_len > 255
                        || content.trim().is_empty()
                        || categories.iter().flatten().any(|id| *id <= 0);
                    assert_eq!(
                        check_create(form).is_err(),
                        should_fail,
                        "title={title:?} content={content:?} categories={categories:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut form = create_form("  Title \n", "\tContent ", None);
        form.normalize();
        let once = form.clone();
        form.normalize();
        assert_eq!(form, once);
        assert_eq!(form.title, "Title");

        let mut edit = NewsEditForm {
            title: Some(" t ".into()),
            content: None,
            categories: None,
        };
        edit.normalize();
        let once = edit.clone();
        edit.normalize();
        assert_eq!(edit, once);
        assert_eq!(edit.title.as_deref(), Some("t"));
    }

    #[test]
    fn edit_form_requires_at_least_one_field() {
        assert_eq!(
            check_edit(NewsEditForm::default()),
            Err(NO_FIELDS_TO_UPDATE.into())
        );
    }

    #[test]
    fn edit_form_treats_present_empty_values_as_fields() {
        let only_empty_categories = NewsEditForm {
            categories: Some(vec![]),
            ..NewsEditForm::default()
        };
        assert_eq!(check_edit(only_empty_categories), Ok(()));

        let blank_title = NewsEditForm {
            title: Some("   ".into()),
            ..NewsEditForm::default()
        };
        assert_eq!(
            check_edit(blank_title),
            Err("Title: minimum length is 1".into())
        );

        let blank_content = NewsEditForm {
            content: Some(String::new()),
            ..NewsEditForm::default()
        };
        assert_eq!(
            check_edit(blank_content),
            Err("Content: minimum length is 1".into())
        );
    }

    #[test]
    fn edit_form_applies_create_rules_to_present_fields() {
        let long_title = NewsEditForm {
            title: Some("b".repeat(256)),
            ..NewsEditForm::default()
        };
        assert_eq!(
            check_edit(long_title),
            Err("Title: maximum length is 255".into())
        );

        let bad_categories = NewsEditForm {
            categories: Some(vec![-7]),
            ..NewsEditForm::default()
        };
        assert_eq!(
            check_edit(bad_categories),
            Err("Categories[0]: must be greater than 0".into())
        );
    }

    #[test]
    fn forms_decode_from_pascal_case_keys() {
        let form: NewsCreateForm =
            serde_json::from_str(r#"{"Title":"t","Content":"c","Categories":[1,2]}"#).unwrap();
        assert_eq!(form, create_form("t", "c", Some(vec![1, 2])));

        let form: NewsCreateForm = serde_json::from_str(r#"{"Content":"c"}"#).unwrap();
        assert_eq!(form.title, "");

        let edit: NewsEditForm =
            serde_json::from_str(r#"{"Title":null,"Categories":[]}"#).unwrap();
        assert_eq!(edit.title, None);
        assert_eq!(edit.categories, Some(vec![]));
    }

    #[test]
    fn forms_accept_lowercase_keys() {
        let form: NewsCreateForm =
            serde_json::from_str(r#"{"title":"t","content":"c","categories":[3]}"#).unwrap();
        assert_eq!(form, create_form("t", "c", Some(vec![3])));

        let edit: NewsEditForm = serde_json::from_str(r#"{"content":"c"}"#).unwrap();
        assert_eq!(edit.content.as_deref(), Some("c"));
        assert!(!edit.is_empty());
    }

    #[test]
    fn duplicate_keys_fail_typed_decoding() {
        assert!(
            serde_json::from_str::<NewsCreateForm>(r#"{"Title":"a","Title":"b","Content":"c"}"#)
                .is_err()
        );
    }

    #[test]
    fn fractional_categories_fail_typed_decoding() {
        assert!(serde_json::from_str::<NewsEditForm>(r#"{"Categories":[1.0]}"#).is_err());
    }
}
