use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandCatalogEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub color_hex: &'static str,
    pub initial: char,
}

const fn brand(
    name: &'static str,
    category: &'static str,
    color_hex: &'static str,
    initial: char,
) -> BrandCatalogEntry {
    BrandCatalogEntry {
        name,
        category,
        color_hex,
        initial,
    }
}

pub const BRANDS: [BrandCatalogEntry; 18] = [
    brand("Arcadia Apparel", "Fashion", "6366F1", 'A'),
    brand("Bluefin Travel", "Travel", "0EA5E9", 'B'),
    brand("Cedar & Oak", "Home Goods", "92400E", 'C'),
    brand("Driftwood Coffee", "Food & Beverage", "78350F", 'D'),
    brand("Everbright Fitness", "Health", "16A34A", 'E'),
    brand("Foxglove Beauty", "Cosmetics", "DB2777", 'F'),
    brand("Granite Outdoors", "Sporting Goods", "57534E", 'G'),
    brand("Harborline Shoes", "Footwear", "1D4ED8", 'H'),
    brand("Ivyleaf Books", "Media", "047857", 'I'),
    brand("Junction Electronics", "Electronics", "4338CA", 'J'),
    brand("Kite & Anchor", "Fashion", "0891B2", 'K'),
    brand("Lumen Audio", "Electronics", "7C3AED", 'L'),
    brand("Meridian Grocers", "Grocery", "65A30D", 'M'),
    brand("Northwind Gear", "Sporting Goods", "0F766E", 'N'),
    brand("Orchard Lane Toys", "Toys", "EA580C", 'O'),
    brand("Pemberton Watches", "Accessories", "B45309", 'P'),
    brand("Quartz & Co", "Accessories", "9333EA", 'Q'),
    brand("Rosewater Candles", "Home Goods", "E11D48", 'R'),
];

pub const AMOUNTS: [f64; 20] = [
    12.99, 18.50, 24.00, 29.99, 34.75, 42.20, 48.99, 55.50, 61.25, 68.00,
    74.99, 83.40, 91.99, 104.50, 118.75, 132.99, 149.00, 168.25, 189.99,
    212.40,
];

/// The 3:2 repetition encodes the 60/40 in-store/online split; drawing a
/// uniform index over this table is the weighting mechanism.
pub const CHANNELS: [&str; 5] = ["In store", "In store", "Online", "In store", "Online"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    EmptyBrandTable,
    EmptyAmountTable,
    EmptyChannelTable,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBrandTable => write!(f, "brand catalog must not be empty"),
            Self::EmptyAmountTable => write!(f, "amount catalog must not be empty"),
            Self::EmptyChannelTable => write!(f, "channel catalog must not be empty"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Validated handle over the three fixed tables. Emptiness is rejected here,
/// at construction, so draw paths never index out of range.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs {
    brands: &'static [BrandCatalogEntry],
    amounts: &'static [f64],
    channels: &'static [&'static str],
}

impl Catalogs {
    pub fn new(
        brands: &'static [BrandCatalogEntry],
        amounts: &'static [f64],
        channels: &'static [&'static str],
    ) -> Result<Self, CatalogError> {
        if brands.is_empty() {
            return Err(CatalogError::EmptyBrandTable);
        }
        if amounts.is_empty() {
            return Err(CatalogError::EmptyAmountTable);
        }
        if channels.is_empty() {
            return Err(CatalogError::EmptyChannelTable);
        }

        Ok(Self {
            brands,
            amounts,
            channels,
        })
    }

    pub fn builtin() -> Self {
        Self {
            brands: &BRANDS,
            amounts: &AMOUNTS,
            channels: &CHANNELS,
        }
    }

    pub fn brands(&self) -> &'static [BrandCatalogEntry] {
        self.brands
    }

    pub fn amounts(&self) -> &'static [f64] {
        self.amounts
    }

    pub fn channels(&self) -> &'static [&'static str] {
        self.channels
    }
}
