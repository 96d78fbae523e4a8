use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ValueObject, Weight};

/// Closed set of catalog products.
///
/// Menu ids map 1:1 onto variants; an unknown id is a valid empty lookup
/// result, not an error.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProductCode {
    Laptop,
    Smartphone,
    Tv,
}

impl ProductCode {
    /// All catalog codes, in menu order.
    pub const ALL: [ProductCode; 3] = [
        ProductCode::Laptop,
        ProductCode::Smartphone,
        ProductCode::Tv,
    ];

    /// Map a console id onto a code. Valid ids are 1, 2, 3.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(ProductCode::Laptop),
            2 => Some(ProductCode::Smartphone),
            3 => Some(ProductCode::Tv),
            _ => None,
        }
    }

    /// The menu id this code is selected by.
    pub const fn id(self) -> u32 {
        match self {
            ProductCode::Laptop => 1,
            ProductCode::Smartphone => 2,
            ProductCode::Tv => 3,
        }
    }
}

/// Immutable product attributes.
///
/// Identity is by [`ProductCode`], not by instance: two values with the same
/// code describe the same catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    code: ProductCode,
    name: String,
    unit_price: Money,
    unit_weight: Weight,
}

impl Product {
    pub fn new(
        code: ProductCode,
        name: impl Into<String>,
        unit_price: Money,
        unit_weight: Weight,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            code,
            name,
            unit_price,
            unit_weight,
        })
    }

    pub fn code(&self) -> ProductCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn unit_weight(&self) -> Weight {
        self.unit_weight
    }
}

impl ValueObject for Product {}

/// The canonical product definitions.
///
/// Defined once at process start, never mutated, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: BTreeMap<ProductCode, Product>,
}

impl Catalog {
    /// The fixed demo catalog: Laptop, Smartphone, TV.
    pub fn standard() -> Self {
        let entries = [
            (
                ProductCode::Laptop,
                "Laptop",
                Money::from_cents(80_000),
                Weight::from_grams(2_500),
            ),
            (
                ProductCode::Smartphone,
                "Smartphone",
                Money::from_cents(40_000),
                Weight::from_grams(500),
            ),
            (
                ProductCode::Tv,
                "TV",
                Money::from_cents(100_000),
                Weight::from_grams(10_000),
            ),
        ];

        let products = entries
            .into_iter()
            .map(|(code, name, unit_price, unit_weight)| {
                (
                    code,
                    Product {
                        code,
                        name: name.to_string(),
                        unit_price,
                        unit_weight,
                    },
                )
            })
            .collect();

        Self { products }
    }

    /// Look up a product by console id. Unknown ids yield `None`.
    pub fn lookup(&self, id: i64) -> Option<&Product> {
        ProductCode::from_id(id).and_then(|code| self.get(code))
    }

    pub fn get(&self, code: ProductCode) -> Option<&Product> {
        self.products.get(&code)
    }

    /// Products in menu (code) order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_fixed_attributes_for_valid_ids() {
        let catalog = Catalog::standard();

        let laptop = catalog.lookup(1).unwrap();
        assert_eq!(laptop.name(), "Laptop");
        assert_eq!(laptop.unit_price(), Money::from_cents(80_000));
        assert_eq!(laptop.unit_weight(), Weight::from_grams(2_500));

        let smartphone = catalog.lookup(2).unwrap();
        assert_eq!(smartphone.name(), "Smartphone");
        assert_eq!(smartphone.unit_price(), Money::from_cents(40_000));
        assert_eq!(smartphone.unit_weight(), Weight::from_grams(500));

        let tv = catalog.lookup(3).unwrap();
        assert_eq!(tv.name(), "TV");
        assert_eq!(tv.unit_price(), Money::from_cents(100_000));
        assert_eq!(tv.unit_weight(), Weight::from_grams(10_000));
    }

    #[test]
    fn lookup_of_unknown_id_is_empty_not_an_error() {
        let catalog = Catalog::standard();

        for id in [0, 4, 99, -1, i64::MAX, i64::MIN] {
            assert!(catalog.lookup(id).is_none(), "id {id} should not resolve");
        }
    }

    #[test]
    fn codes_round_trip_through_menu_ids() {
        for code in ProductCode::ALL {
            assert_eq!(ProductCode::from_id(i64::from(code.id())), Some(code));
        }
    }

    #[test]
    fn iteration_follows_menu_order() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Laptop", "Smartphone", "TV"]);
    }

    #[test]
    fn product_rejects_empty_name() {
        let err = Product::new(
            ProductCode::Laptop,
            "   ",
            Money::from_cents(1),
            Weight::from_grams(1),
        )
        .unwrap_err();

        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
