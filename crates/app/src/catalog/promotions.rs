//! Promotion Catalog
//!
//! Each entry is decoded on its own so that a malformed promotion, offer or rule is dropped
//! without discarding the rest of the document. Surviving promotions keep document order.

use std::path::Path;

use checkout::{
    products::ProductCode,
    promotions::{BulkRule, FreeItemsRule, Promotion, PromotionKind},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{CatalogError, read_document};

/// Reasons a single promotion entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionParseError {
    /// Missing or unrecognised promotion kind
    #[error("promotion {0:?} not found")]
    NotFound(String),

    /// Recognised kind with unusable contents
    #[error("promotion {code} invalid: {message}")]
    Invalid {
        /// Promotion kind code
        code: String,

        /// What was wrong
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct PromotionRecord {
    code: Option<String>,

    #[serde(default)]
    promos: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct OfferRecord {
    product: String,

    #[serde(default)]
    rules: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct BulkRuleRecord {
    buy: u32,
    price: i64,
}

#[derive(Debug, Deserialize)]
struct FreeItemsRuleRecord {
    buy: u32,
    free: u32,
}

/// Load every usable promotion listed in `path`.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the file cannot be read or is not a list. Entries that fail
/// to parse are logged and skipped.
pub fn load(path: &Path) -> Result<Vec<Promotion>, CatalogError> {
    let entries: Vec<Value> = read_document(path)?;

    Ok(parse_all(entries))
}

/// Parse each entry, skipping the ones that are not usable.
pub fn parse_all(entries: Vec<Value>) -> Vec<Promotion> {
    let total = entries.len();

    let promotions: Vec<Promotion> = entries
        .into_iter()
        .filter_map(|entry| match parse_promotion(entry) {
            Ok(promotion) => Some(promotion),
            Err(error) => {
                warn!(%error, "skipping promotion");
                None
            }
        })
        .collect();

    info!(
        loaded = promotions.len(),
        skipped = total - promotions.len(),
        "promotions parsed"
    );

    promotions
}

/// Parse a single promotion entry.
///
/// # Errors
///
/// - [`PromotionParseError::NotFound`]: the entry has no kind, or an unrecognised one.
/// - [`PromotionParseError::Invalid`]: the entry is not an object, or none of its rules are
///   usable.
pub fn parse_promotion(entry: Value) -> Result<Promotion, PromotionParseError> {
    let record: PromotionRecord =
        serde_json::from_value(entry).map_err(|error| PromotionParseError::Invalid {
            code: String::new(),
            message: error.to_string(),
        })?;

    let code = record
        .code
        .ok_or_else(|| PromotionParseError::NotFound(String::new()))?;

    let kind = PromotionKind::from_code(&code)
        .ok_or_else(|| PromotionParseError::NotFound(code.clone()))?;

    let promotion = match kind {
        PromotionKind::Bulk => Promotion::Bulk(parse_offers(
            &code,
            record.promos,
            |rule: BulkRuleRecord| {
                (rule.buy > 0 && rule.price >= 0).then(|| BulkRule::new(rule.buy, rule.price))
            },
        )),
        PromotionKind::FreeItems => Promotion::FreeItems(parse_offers(
            &code,
            record.promos,
            |rule: FreeItemsRuleRecord| {
                (rule.buy > 0).then(|| FreeItemsRule::new(rule.buy, rule.free))
            },
        )),
    };

    if promotion.product_codes().is_empty() {
        return Err(PromotionParseError::Invalid {
            code,
            message: "empty items list".to_string(),
        });
    }

    Ok(promotion)
}

/// Decode the offers of one promotion, keeping only offers with at least one usable rule.
fn parse_offers<P, Rec, R, F>(code: &str, promos: Vec<Value>, accept: F) -> P
where
    P: FromIterator<(ProductCode, Vec<R>)>,
    Rec: DeserializeOwned,
    F: Fn(Rec) -> Option<R>,
{
    promos
        .into_iter()
        .filter_map(|offer| {
            let offer: OfferRecord = match serde_json::from_value(offer) {
                Ok(offer) => offer,
                Err(error) => {
                    warn!(promotion = code, %error, "skipping malformed offer");
                    return None;
                }
            };

            let product = ProductCode::from(offer.product);

            if product.is_blank() {
                warn!(promotion = code, "skipping offer without a product code");
                return None;
            }

            let rules: Vec<R> = offer
                .rules
                .into_iter()
                .filter_map(|rule| {
                    let parsed = serde_json::from_value::<Rec>(rule.clone())
                        .ok()
                        .and_then(&accept);

                    if parsed.is_none() {
                        warn!(promotion = code, %product, %rule, "skipping invalid rule");
                    }

                    parsed
                })
                .collect();

            (!rules.is_empty()).then_some((product, rules))
        })
        .collect()
}
