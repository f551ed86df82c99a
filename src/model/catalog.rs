//! Catalog Model
//!
//! Listing records and the closed enumerations they are filtered on.
//! Also carries the bundled sample catalog used when the backend is
//! unreachable (fallback analog of a local cache).

/// Item condition, closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "like new" | "like-new" => Ok(Condition::LikeNew),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            "poor" => Ok(Condition::Poor),
            other => Err(format!("unknown condition '{}'", other)),
        }
    }
}

/// Item category, closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Textbooks,
    Electronics,
    Clothing,
    Accessories,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Textbooks,
        Category::Electronics,
        Category::Clothing,
        Category::Accessories,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Textbooks => "Textbooks",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Other => "Other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "textbooks" => Ok(Category::Textbooks),
            "electronics" => Ok(Category::Electronics),
            "clothing" => Ok(Category::Clothing),
            "accessories" => Ok(Category::Accessories),
            "other" => Ok(Category::Other),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Status of a seller's own listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Sold,
}

impl ListingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Sold => "Sold",
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ListingStatus::Active),
            "sold" => Ok(ListingStatus::Sold),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// A single marketplace listing
///
/// `price` is the display string, `price_value` the numeric value used for
/// comparisons and filtering. `condition`/`category`/`status` are `None`
/// when the source record carried no recognizable value; filters silently
/// admit such items.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub price: String,
    pub price_value: f64,
    pub condition: Option<Condition>,
    pub category: Option<Category>,
    pub date_posted: String,
    pub seller: String,
    pub location: String,
    pub negotiable: bool,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub status: Option<ListingStatus>,
}

impl Listing {
    /// Minimal constructor for catalog entries (detail fields empty)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        price_value: f64,
        condition: Condition,
        category: Category,
        date_posted: &str,
        seller: &str,
        location: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price: crate::utils::format_price(price_value),
            price_value,
            condition: Some(condition),
            category: Some(category),
            date_posted: date_posted.to_string(),
            seller: seller.to_string(),
            location: location.to_string(),
            negotiable: false,
            description: None,
            images: Vec::new(),
            status: None,
        }
    }

    fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Bundled sample catalog for the Buy view
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing::new(
            "1",
            "Calculus Textbook",
            45.0,
            Condition::LikeNew,
            Category::Textbooks,
            "2024-01-15",
            "John D.",
            "Engineering Building",
        ),
        Listing::new(
            "2",
            "Scientific Calculator",
            25.0,
            Condition::Good,
            Category::Electronics,
            "2024-01-10",
            "Sarah M.",
            "Math Department",
        ),
        Listing::new(
            "3",
            "Lab Coat",
            15.0,
            Condition::New,
            Category::Clothing,
            "2024-01-05",
            "Mike R.",
            "Science Lab",
        ),
        Listing::new(
            "4",
            "Programming Notes",
            8.0,
            Condition::Good,
            Category::Textbooks,
            "2024-01-20",
            "Alex K.",
            "Computer Science",
        ),
    ]
}

/// Bundled sample data for the seller's Previous-items view
pub fn sample_seller_listings() -> Vec<Listing> {
    vec![
        Listing::new(
            "1",
            "Physics Textbook",
            35.0,
            Condition::LikeNew,
            Category::Textbooks,
            "2024-01-15",
            "You",
            "Campus",
        )
        .with_status(ListingStatus::Sold),
        Listing::new(
            "2",
            "Chemistry Lab Kit",
            20.0,
            Condition::Good,
            Category::Electronics,
            "2024-01-10",
            "You",
            "Campus",
        )
        .with_status(ListingStatus::Active),
        Listing::new(
            "3",
            "Math Calculator",
            15.0,
            Condition::New,
            Category::Electronics,
            "2024-01-05",
            "You",
            "Campus",
        )
        .with_status(ListingStatus::Sold),
    ]
}
