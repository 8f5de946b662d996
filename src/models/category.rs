use crate::models::transaction::TransactionType;

/// A styled classification for transactions. The catalog is fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub category_type: TransactionType,
    pub color: &'static str,
    pub icon: &'static str,
}

impl Category {
    const fn new(
        id: &'static str,
        name: &'static str,
        category_type: TransactionType,
        color: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            category_type,
            color,
            icon,
        }
    }

    /// Parses the `#RRGGBB` color into its components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

const DEFAULT_CATEGORIES: [Category; 8] = [
    Category::new("1", "Salario", TransactionType::Income, "#10B981", "💼"),
    Category::new("2", "Freelance", TransactionType::Income, "#059669", "💻"),
    Category::new("3", "Inversiones", TransactionType::Income, "#047857", "📈"),
    Category::new("4", "Alimentación", TransactionType::Expense, "#EF4444", "🍽️"),
    Category::new("5", "Transporte", TransactionType::Expense, "#DC2626", "🚗"),
    Category::new("6", "Entretenimiento", TransactionType::Expense, "#B91C1C", "🎬"),
    Category::new("7", "Compras", TransactionType::Expense, "#991B1B", "🛍️"),
    Category::new("8", "Servicios", TransactionType::Expense, "#7F1D1D", "🏠"),
];

pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES.to_vec()
}

pub fn categories_for(categories: &[Category], category_type: TransactionType) -> Vec<&Category> {
    categories
        .iter()
        .filter(|category| category.category_type == category_type)
        .collect()
}

/// Exact name lookup, as used when attaching color and icon to a transaction.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|category| category.name == name)
}
