use serde::{Deserialize, Serialize};

use crate::shared::query::QueryBuilder;

/// Top-level service category. Also embedded in products, services and
/// provider category links, where most fields may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: i64,
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub description_ar: Option<String>,
    pub description_en: Option<String>,
    pub marker_image: Option<String>,
    pub image: Option<String>,
    pub color_code: Option<String>,
    pub platform_discount: Option<f64>,
}

impl Category {
    pub fn label(&self) -> String {
        self.name_en
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| self.name_ar.clone().filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListParams {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub color_code: Option<String>,
}

impl CategoryListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        q.push_text("NameAr", self.name_ar.as_deref())
            .push_text("NameEn", self.name_en.as_deref())
            .push_text("ColorCode", self.color_code.as_deref());
        q
    }
}

/// Text part of the category create/update multipart form. Image files are
/// attached separately as `MarkerImage` and `Image`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    pub color_code: String,
    /// Fraction in `[0, 1]`.
    pub platform_discount: f64,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name_ar: category.name_ar.clone().unwrap_or_default(),
            name_en: category.name_en.clone().unwrap_or_default(),
            description_ar: category.description_ar.clone().unwrap_or_default(),
            description_en: category.description_en.clone().unwrap_or_default(),
            color_code: category.color_code.clone().unwrap_or_default(),
            platform_discount: category.platform_discount.unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name_ar.trim().is_empty() || self.name_en.trim().is_empty() {
            return Err("Category names in both Arabic and English are required.".to_string());
        }
        if !(0.0..=1.0).contains(&self.platform_discount) {
            return Err("Platform discount must be between 0 and 1.".to_string());
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
            ("PlatformDiscount", self.platform_discount.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_category() {
        let cat: Category = serde_json::from_str(r#"{"id":4,"nameEn":"Plumbing"}"#).unwrap();
        assert_eq!(cat.id, 4);
        assert_eq!(cat.label(), "Plumbing");
        assert!(cat.color_code.is_none());
    }

    #[test]
    fn test_label_falls_back_to_arabic() {
        let cat = Category {
            name_ar: Some("تنظيف".into()),
            name_en: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(cat.label(), "تنظيف");
        assert_eq!(Category::default().label(), "N/A");
    }

    #[test]
    fn test_form_fields_order_and_format() {
        let form = CategoryForm {
            name_ar: "سباكة".into(),
            name_en: "Plumbing".into(),
            color_code: "2196F3".into(),
            platform_discount: 0.15,
            ..Default::default()
        };
        let fields = form.text_fields();
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["NameAr", "NameEn", "DescriptionAr", "DescriptionEn", "ColorCode", "PlatformDiscount"]
        );
        assert_eq!(fields[5].1, "0.15");
    }

    #[test]
    fn test_form_validation() {
        let mut form = CategoryForm {
            name_ar: "سباكة".into(),
            name_en: "Plumbing".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        form.platform_discount = 1.4;
        assert!(form.validate().is_err());
        form.platform_discount = 0.0;
        form.name_en = " ".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_list_query() {
        let params = CategoryListParams {
            name_en: Some("Clean".into()),
            ..Default::default()
        };
        assert_eq!(params.to_query().build(), "NameEn=Clean");
    }
}
