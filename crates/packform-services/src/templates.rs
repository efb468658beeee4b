//! Template catalog: browsable packaging templates.

use serde::{Deserialize, Serialize};

/// Packaging category a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Box,
    Bag,
    Label,
}

/// Artwork URLs for a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateImages {
    /// Flat (unfolded) render, used as the editing backdrop.
    pub flat: String,
    /// Cut/fold outline overlay.
    pub dieline: String,
    /// Optional assembled 3D preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_d: Option<String>,
}

/// One orderable size of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSize {
    pub id: String,
    pub label: String,
    pub width_mm: f64,
    pub height_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_mm: Option<f64>,
}

impl TemplateSize {
    /// Face area in square millimetres.
    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

/// One orderable material of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub label: String,
    /// Multiplier applied to the template's base unit price.
    pub price_multiplier: f64,
}

/// Pricing block of a template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemplatePrice {
    /// Base unit price for the reference size on the cheapest material.
    pub base: f64,
}

/// A browsable packaging template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub images: TemplateImages,
    pub sizes: Vec<TemplateSize>,
    pub materials: Vec<Material>,
    pub price: TemplatePrice,
}

impl TemplateDescriptor {
    pub fn size(&self, id: &str) -> Option<&TemplateSize> {
        self.sizes.iter().find(|s| s.id == id)
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }
}

#[cfg(feature = "client")]
impl crate::ApiClient {
    /// `GET /api/templates`
    pub async fn list_templates(&self) -> crate::ServiceResult<Vec<TemplateDescriptor>> {
        self.get_json("/api/templates").await
    }

    /// `GET /api/templates/{id}`
    pub async fn template(&self, id: &str) -> crate::ServiceResult<TemplateDescriptor> {
        self.get_json(&format!("/api/templates/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_template() -> TemplateDescriptor {
        TemplateDescriptor {
            id: "tpl-box-mailer".into(),
            name: "Mailer Box".into(),
            category: TemplateCategory::Box,
            images: TemplateImages {
                flat: "https://cdn.example/box/flat.png".into(),
                dieline: "https://cdn.example/box/dieline.svg".into(),
                three_d: None,
            },
            sizes: vec![TemplateSize {
                id: "s".into(),
                label: "Small (100×100 mm)".into(),
                width_mm: 100.0,
                height_mm: 100.0,
                depth_mm: Some(40.0),
            }],
            materials: vec![Material {
                id: "kraft".into(),
                label: "Kraft".into(),
                price_multiplier: 1.0,
            }],
            price: TemplatePrice { base: 2.0 },
        }
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_value(sample_template()).unwrap();
        assert!(json["images"]["flat"].is_string());
        assert!(json["sizes"][0]["widthMm"].is_number());
        assert!(json["materials"][0]["priceMultiplier"].is_number());
        assert_eq!(json["category"], "box");
        // Absent 3D preview is omitted, not null.
        assert!(json["images"].get("threeD").is_none());
    }

    #[test]
    fn optional_three_d_round_trips() {
        let mut template = sample_template();
        template.images.three_d = Some("https://cdn.example/box/3d.glb".into());
        let json = serde_json::to_string(&template).unwrap();
        let back: TemplateDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.images.three_d, template.images.three_d);
    }

    #[test]
    fn size_and_material_lookup() {
        let template = sample_template();
        assert!(template.size("s").is_some());
        assert!(template.size("xl").is_none());
        assert!(template.material("kraft").is_some());
        assert!(template.material("gold").is_none());
    }
}
