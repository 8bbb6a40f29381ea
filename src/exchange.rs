//! Grid Exchange
//!
//! Portable share tokens: a TopGrid serialized to JSON and percent-encoded
//! for embedding in a URL query parameter. Token bytes are compatible with
//! `encodeURIComponent(JSON.stringify(grid))`, so links produced by the
//! original web app still import here.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{GridError, GridResult};
use crate::models::TopGrid;
use crate::store::CollectionStore;

/// URL query parameter carrying a shared grid
pub const SHARE_PARAM: &str = "topgrid";

/// encodeURIComponent leaves `- _ . ! ~ * ' ( )` unescaped
const TOKEN_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a grid as an opaque, URL-safe token
pub fn encode(grid: &TopGrid) -> String {
    // Serialization of a plain struct cannot fail
    let json = serde_json::to_string(grid).unwrap_or_default();
    utf8_percent_encode(&json, TOKEN_SET).to_string()
}

/// Decode a token back into a grid.
///
/// Tokens arrive from untrusted links: anything that is not valid
/// percent-encoded UTF-8 JSON matching the TopGrid shape (title present,
/// categories present, every category carrying all three fields) is rejected
/// before it can reach the store.
pub fn decode(token: &str) -> GridResult<TopGrid> {
    let json = percent_decode_str(token)
        .decode_utf8()
        .map_err(|e| GridError::MalformedToken(e.to_string()))?;
    serde_json::from_str::<TopGrid>(&json).map_err(|e| GridError::MalformedToken(e.to_string()))
}

/// Decode a received token and append the grid to the collection.
///
/// Duplicate titles are rejected without mutation; the sender's grid never
/// overwrites a local one. Returns the slot of the imported grid.
pub fn import_shared(token: &str, store: &mut CollectionStore) -> GridResult<usize> {
    let grid = decode(token)?;
    if store.title_exists(&grid.title, None) {
        return Err(GridError::DuplicateTitle(grid.title));
    }
    store.upsert(None, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;
    use std::rc::Rc;

    fn movies_grid() -> TopGrid {
        TopGrid::new(
            "Movies",
            vec![Category::new("Best Film", "Inception", "http://x/i.png")],
        )
    }

    fn empty_store() -> CollectionStore {
        CollectionStore::load(Rc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_roundtrip() {
        let grid = TopGrid::new(
            "Café & Más",
            vec![
                Category::new("Best Film", "Inception", "http://x/i.png?a=1&b=2"),
                Category::new("第二", "choice two", "http://x/2.png"),
            ],
        );
        assert_eq!(decode(&encode(&grid)).unwrap(), grid);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode(&movies_grid());
        assert!(!token.contains('{'));
        assert!(!token.contains('"'));
        assert!(!token.contains('&'));
        assert!(!token.contains(' '));
    }

    #[test]
    fn test_decodes_javascript_produced_token() {
        // encodeURIComponent(JSON.stringify(...)) output from the original app
        let token = "%7B%22title%22%3A%22Movies%22%2C%22categories%22%3A%5B%7B%22categoryName%22%3A%22Best%20Film%22%2C%22choiceName%22%3A%22Inception%22%2C%22imageUrl%22%3A%22http%3A%2F%2Fx%2Fi.png%22%7D%5D%7D";
        assert_eq!(decode(token).unwrap(), movies_grid());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("not%20json"),
            Err(GridError::MalformedToken(_))
        ));
        assert!(matches!(decode("%FF%FE"), Err(GridError::MalformedToken(_))));
    }

    #[test]
    fn test_decode_rejects_missing_categories() {
        let token = encode_json(r#"{"title":"Movies"}"#);
        assert!(matches!(decode(&token), Err(GridError::MalformedToken(_))));
    }

    #[test]
    fn test_decode_rejects_missing_title() {
        let token = encode_json(r#"{"categories":[]}"#);
        assert!(matches!(decode(&token), Err(GridError::MalformedToken(_))));
    }

    #[test]
    fn test_decode_rejects_incomplete_category() {
        let token =
            encode_json(r#"{"title":"T","categories":[{"categoryName":"a","choiceName":"b"}]}"#);
        assert!(matches!(decode(&token), Err(GridError::MalformedToken(_))));
    }

    #[test]
    fn test_import_into_fresh_collection() {
        let mut store = empty_store();
        let slot = import_shared(&encode(&movies_grid()), &mut store).unwrap();

        assert_eq!(slot, 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0), Some(&movies_grid()));
    }

    #[test]
    fn test_import_duplicate_title_rejected() {
        let mut store = empty_store();
        store.upsert(None, movies_grid()).unwrap();

        let result = import_shared(&encode(&movies_grid()), &mut store);
        assert_eq!(
            result,
            Err(GridError::DuplicateTitle("Movies".to_string()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_malformed_token_leaves_store_untouched() {
        let mut store = empty_store();
        let result = import_shared(&encode_json(r#"{"title":"T"}"#), &mut store);

        assert!(matches!(result, Err(GridError::MalformedToken(_))));
        assert!(store.is_empty());
    }

    fn encode_json(json: &str) -> String {
        utf8_percent_encode(json, TOKEN_SET).to_string()
    }

    fn arb_grid() -> impl Strategy<Value = TopGrid> {
        let category = (any::<String>(), any::<String>(), any::<String>()).prop_map(
            |(category_name, choice_name, image_url)| Category {
                category_name,
                choice_name,
                image_url,
            },
        );
        (any::<String>(), prop::collection::vec(category, 0..8))
            .prop_map(|(title, categories)| TopGrid { title, categories })
    }

    proptest! {
        #[test]
        fn prop_roundtrip_preserves_grid(grid in arb_grid()) {
            prop_assert_eq!(decode(&encode(&grid)).unwrap(), grid);
        }
    }
}
