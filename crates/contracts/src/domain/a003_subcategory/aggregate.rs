use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::Category;
use crate::shared::query::QueryBuilder;

const DEFAULT_COLOR: &str = "4CAF50";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubCategory {
    pub id: i64,
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
    pub marker_image: Option<String>,
    pub image: Option<String>,
    pub color_code: Option<String>,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub category: Option<Category>,
}

impl SubCategory {
    pub fn label(&self) -> String {
        self.name_en
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| self.name_ar.clone().filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn parent_label(&self) -> String {
        self.category
            .as_ref()
            .map(Category::label)
            .or_else(|| self.category_name.clone())
            .unwrap_or_else(|| format!("#{}", self.category_id))
    }
}

/// "Category / Subcategory" of a catalogue item, with whichever parts are known.
pub fn classification_label(category: Option<&Category>, sub: Option<&SubCategory>) -> String {
    let parts: Vec<String> = [category.map(Category::label), sub.map(SubCategory::label)]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(" / ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubCategoryListParams {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub color_code: Option<String>,
    pub category_id: Option<i64>,
}

impl SubCategoryListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        q.push_text("NameAr", self.name_ar.as_deref())
            .push_text("NameEn", self.name_en.as_deref())
            .push_text("ColorCode", self.color_code.as_deref())
            .push_id("CategoryId", self.category_id);
        q
    }
}

/// Text part of the subcategory multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategoryForm {
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    /// Stored without the leading `#`.
    pub color_code: String,
    pub category_id: i64,
}

impl Default for SubCategoryForm {
    fn default() -> Self {
        Self {
            name_ar: String::new(),
            name_en: String::new(),
            description_ar: String::new(),
            description_en: String::new(),
            color_code: DEFAULT_COLOR.to_string(),
            category_id: 0,
        }
    }
}

impl SubCategoryForm {
    pub fn from_subcategory(sub: &SubCategory) -> Self {
        let color_code = sub
            .color_code
            .as_deref()
            .map(|c| c.trim_start_matches('#').to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());
        Self {
            name_ar: sub.name_ar.clone().unwrap_or_default(),
            name_en: sub.name_en.clone().unwrap_or_default(),
            description_ar: sub.description_ar.clone().unwrap_or_default(),
            description_en: sub.description_en.clone().unwrap_or_default(),
            color_code,
            category_id: sub.category_id,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name_ar.trim().is_empty() || self.name_en.trim().is_empty() {
            return Err("Subcategory names in both Arabic and English are required.".to_string());
        }
        if self.category_id <= 0 {
            return Err("Please select a parent category.".to_string());
        }
        Ok(())
    }

    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("NameAr", self.name_ar.clone()),
            ("NameEn", self.name_en.clone()),
            ("DescriptionAr", self.description_ar.clone()),
            ("DescriptionEn", self.description_en.clone()),
            ("ColorCode", self.color_code.clone()),
            ("CategoryId", self.category_id.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_strips_hash_and_defaults_color() {
        let sub = SubCategory {
            id: 9,
            color_code: Some("#FF5722".into()),
            category_id: 2,
            ..Default::default()
        };
        assert_eq!(SubCategoryForm::from_subcategory(&sub).color_code, "FF5722");

        let plain = SubCategory::default();
        assert_eq!(SubCategoryForm::from_subcategory(&plain).color_code, "4CAF50");
    }

    #[test]
    fn test_requires_parent_category() {
        let form = SubCategoryForm {
            name_ar: "تنظيف المنزل".into(),
            name_en: "Home Cleaning".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err("Please select a parent category.".to_string())
        );
        let form = SubCategoryForm {
            category_id: 1,
            ..form
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.text_fields().last().unwrap(), &("CategoryId", "1".to_string()));
    }

    #[test]
    fn test_parent_label() {
        let sub = SubCategory {
            category_id: 3,
            category_name: Some("Cleaning".into()),
            ..Default::default()
        };
        assert_eq!(sub.parent_label(), "Cleaning");
        let orphan = SubCategory {
            category_id: 3,
            ..Default::default()
        };
        assert_eq!(orphan.parent_label(), "#3");
    }

    #[test]
    fn test_classification_label() {
        let category = Category {
            name_en: Some("Cleaning".into()),
            ..Default::default()
        };
        let sub = SubCategory {
            name_ar: Some("تنظيف منازل".into()),
            ..Default::default()
        };
        assert_eq!(classification_label(None, None), "—");
        assert_eq!(classification_label(Some(&category), None), "Cleaning");
        assert_eq!(
            classification_label(Some(&category), Some(&sub)),
            "Cleaning / تنظيف منازل"
        );
    }

    #[test]
    fn test_list_query_skips_zero_category() {
        let params = SubCategoryListParams {
            category_id: Some(0),
            name_ar: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(params.to_query().build(), "NameAr=x");
    }
}
