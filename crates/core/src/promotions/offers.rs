//! Promotion Offers

use rustc_hash::FxHashMap;

use crate::products::ProductCode;

/// Ordered threshold rules for each product a promotion targets.
///
/// Rule order within a product is the order the rules were supplied in and is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offers<R> {
    rules: FxHashMap<ProductCode, Vec<R>>,
}

impl<R> Offers<R> {
    /// Return the rules for `code`, empty when the product is not targeted.
    pub fn rules(&self, code: &str) -> &[R] {
        self.rules.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over each targeted product and its rules.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductCode, &[R])> {
        self.rules.iter().map(|(code, rules)| (code, rules.as_slice()))
    }

    /// Return the targeted product codes, sorted.
    pub fn product_codes(&self) -> Vec<&ProductCode> {
        let mut codes: Vec<_> = self.rules.keys().collect();

        codes.sort_unstable();

        codes
    }

    /// Number of targeted products.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no product is targeted.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R> Default for Offers<R> {
    fn default() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }
}

/// Collects `(code, rules)` pairs; rules for a repeated code are appended after the earlier ones.
impl<R> FromIterator<(ProductCode, Vec<R>)> for Offers<R> {
    fn from_iter<I: IntoIterator<Item = (ProductCode, Vec<R>)>>(iter: I) -> Self {
        let mut rules: FxHashMap<ProductCode, Vec<R>> = FxHashMap::default();

        for (code, product_rules) in iter {
            rules.entry(code).or_default().extend(product_rules);
        }

        Self { rules }
    }
}
