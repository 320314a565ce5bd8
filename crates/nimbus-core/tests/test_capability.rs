use nimbus_core::capability::{check_area, check_param, decode_areas, decode_params};
use nimbus_core::client::CatalogEntry;
use nimbus_core::error::NimbusError;
use nimbus_core::selector::{Area, Param, Satellite};

fn listing(json: &str) -> Vec<CatalogEntry> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_decode_areas_snapshot() {
    let snapshot = listing(
        r#"[
            {"sigla": "BR", "nome": "Brasil"},
            {"sigla": "SE", "nome": "Sudeste"},
            {"sigla": "DF", "nome": "Distrito Federal"}
        ]"#,
    );
    let areas = decode_areas(&snapshot).unwrap();
    assert_eq!(areas, vec![Area::Br, Area::Se, Area::Df]);
}

#[test]
fn test_decode_accepts_capitalized_keys() {
    let snapshot = listing(r#"[{"Sigla": "IV", "Nome": "Infravermelho"}]"#);
    let params = decode_params(&snapshot).unwrap();
    assert_eq!(params, vec![Param::Iv]);
}

#[test]
fn test_malformed_listing_entry_is_fatal() {
    let snapshot = listing(
        r#"[
            {"sigla": "BR", "nome": "Brasil"},
            {"sigla": "ZZ", "nome": "???"}
        ]"#,
    );
    match decode_areas(&snapshot) {
        Err(NimbusError::InvalidArea(code)) => assert_eq!(code, "ZZ"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_check_area_membership() {
    let advertised = [Area::Br, Area::Se];
    assert!(check_area(Satellite::Goes, Area::Br, &advertised).is_ok());

    match check_area(Satellite::Goes, Area::N, &advertised) {
        Err(NimbusError::UnsupportedArea { satellite, area }) => {
            assert_eq!(satellite, "GOES");
            assert_eq!(area, "N");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_check_param_membership() {
    let advertised = [Param::Iv, Param::Vp];
    assert!(check_param(Satellite::Goes, Area::Br, Param::Vp, &advertised).is_ok());

    match check_param(Satellite::Goes, Area::Br, Param::Ch, &advertised) {
        Err(NimbusError::UnsupportedParam {
            satellite,
            area,
            param,
        }) => {
            assert_eq!(satellite, "GOES");
            assert_eq!(area, "BR");
            assert_eq!(param, "CH");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_empty_listing_rejects_everything() {
    assert!(check_area(Satellite::Satelite, Area::Br, &[]).is_err());
    assert!(check_param(Satellite::Satelite, Area::Br, Param::P, &[]).is_err());
}
