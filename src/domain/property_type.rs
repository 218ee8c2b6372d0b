// src/domain/property_type.rs

/// The categories offered by the type dropdowns, in display order.
///
/// A property's `type` on the wire is a free string; this catalogue only drives
/// the dropdown options, badge colours and default photos. Unknown labels are
/// still rendered, with the fallback style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Plot,
    Land,
    House,
    Apartment,
    Office,
    Shop,
    RetailStore,
    Restaurant,
    Hotel,
    Shed,
    Warehouse,
    Factory,
}

pub const FALLBACK_BADGE_CLASS: &str = "bg-gray-100 text-gray-800 border-gray-200";

pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=400&h=300&fit=crop";

impl PropertyType {
    pub const ALL: [PropertyType; 12] = [
        PropertyType::Plot,
        PropertyType::Land,
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Office,
        PropertyType::Shop,
        PropertyType::RetailStore,
        PropertyType::Restaurant,
        PropertyType::Hotel,
        PropertyType::Shed,
        PropertyType::Warehouse,
        PropertyType::Factory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Plot => "Plot",
            PropertyType::Land => "Land",
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Office => "Office",
            PropertyType::Shop => "Shop",
            PropertyType::RetailStore => "Retail Store",
            PropertyType::Restaurant => "Restaurant",
            PropertyType::Hotel => "Hotel",
            PropertyType::Shed => "Shed",
            PropertyType::Warehouse => "Warehouse",
            PropertyType::Factory => "Factory",
        }
    }

    /// Exact label lookup. "office" is not "Office" here; filtering is the
    /// case-insensitive path, styling is not.
    pub fn from_label(label: &str) -> Option<PropertyType> {
        PropertyType::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PropertyType::Plot => "bg-emerald-100 text-emerald-800 border-emerald-200",
            PropertyType::Land => "bg-green-100 text-green-800 border-green-200",
            PropertyType::House => "bg-orange-100 text-orange-800 border-orange-200",
            PropertyType::Apartment => "bg-pink-100 text-pink-800 border-pink-200",
            PropertyType::Office => "bg-indigo-100 text-indigo-800 border-indigo-200",
            PropertyType::Shop => "bg-amber-100 text-amber-800 border-amber-200",
            PropertyType::RetailStore => "bg-purple-100 text-purple-800 border-purple-200",
            PropertyType::Restaurant => "bg-red-100 text-red-800 border-red-200",
            PropertyType::Hotel => "bg-cyan-100 text-cyan-800 border-cyan-200",
            PropertyType::Shed => "bg-blue-100 text-blue-800 border-blue-200",
            PropertyType::Warehouse => "bg-slate-100 text-slate-800 border-slate-200",
            PropertyType::Factory => FALLBACK_BADGE_CLASS,
        }
    }

    pub fn default_image(self) -> &'static str {
        match self {
            PropertyType::Plot | PropertyType::Land => FALLBACK_IMAGE,
            PropertyType::Shed => {
                "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=400&h=300&fit=crop"
            }
            PropertyType::RetailStore | PropertyType::Shop => {
                "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=300&fit=crop"
            }
            PropertyType::Apartment => {
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=400&h=300&fit=crop"
            }
            PropertyType::House => {
                "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=400&h=300&fit=crop"
            }
            PropertyType::Office => {
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=400&h=300&fit=crop"
            }
            PropertyType::Warehouse => {
                "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=300&fit=crop"
            }
            PropertyType::Restaurant => {
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=400&h=300&fit=crop"
            }
            PropertyType::Hotel => {
                "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400&h=300&fit=crop"
            }
            PropertyType::Factory => {
                "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400&h=300&fit=crop"
            }
        }
    }
}

/// Badge classes for any wire label, known or not.
pub fn badge_class_for(label: &str) -> &'static str {
    PropertyType::from_label(label)
        .map(PropertyType::badge_class)
        .unwrap_or(FALLBACK_BADGE_CLASS)
}

/// Default photo for any wire label, known or not.
pub fn default_image_for(label: &str) -> &'static str {
    PropertyType::from_label(label)
        .map(PropertyType::default_image)
        .unwrap_or(FALLBACK_IMAGE)
}
