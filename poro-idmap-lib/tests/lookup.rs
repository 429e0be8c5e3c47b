use poro_idmap_lib::{IdMap, IdQuery, LookupError, mcm_product_url, tcg_product_url};
use std::fs;
use tempfile::TempDir;

#[test]
fn load_and_resolve_by_each_id() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("product-id-map-v2.json");
    fs::write(
        &path,
        r#"{"sv1-25":{"mcmId":"700001","tcgId":"500001"},"sv1-26":{"mcmId":"700002"}}"#,
    )
    .unwrap();

    let map = IdMap::load(&path).unwrap();
    assert_eq!(map.len(), 2);

    let (card, entry) = map.resolve(&IdQuery::Card("sv1-25".to_string())).unwrap();
    assert_eq!(card, "sv1-25");
    assert_eq!(
        entry.mcm_id.as_deref().map(mcm_product_url).as_deref(),
        Some("https://www.cardmarket.com/Pokemon/Products?idProduct=700001")
    );
    assert_eq!(
        entry.tcg_id.as_deref().map(tcg_product_url).as_deref(),
        Some("https://www.tcgplayer.com/product/500001")
    );

    let (card, _) = map.resolve(&IdQuery::Mcm("700002".to_string())).unwrap();
    assert_eq!(card, "sv1-26");

    assert!(map.resolve(&IdQuery::Tcg("700002".to_string())).is_none());
}

#[test]
fn missing_map_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = IdMap::load(&tmp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LookupError::Io { .. }));
}

#[test]
fn invalid_map_is_json_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("map.json");
    fs::write(&path, r#"{"A1":{"mcmId":1}}"#).unwrap();
    let err = IdMap::load(&path).unwrap_err();
    assert!(matches!(err, LookupError::Json { .. }));
}
