use nimbus_core::error::NimbusError;
use nimbus_core::selector::{Area, Param, Satellite};

#[test]
fn test_satellite_round_trip() {
    for sat in Satellite::ALL {
        assert_eq!(Satellite::from_code(sat.code()).unwrap(), sat);
    }
}

#[test]
fn test_area_round_trip() {
    for area in Area::ALL {
        assert_eq!(Area::from_code(area.code()).unwrap(), area);
    }
}

#[test]
fn test_param_round_trip() {
    for param in Param::ALL {
        assert_eq!(Param::from_code(param.code()).unwrap(), param);
    }
}

#[test]
fn test_parsing_is_case_insensitive() {
    assert_eq!(Satellite::from_code("goes").unwrap(), Satellite::Goes);
    assert_eq!(Satellite::from_code("GoesIm").unwrap(), Satellite::GoesIm);
    assert_eq!(Area::from_code("br").unwrap(), Area::Br);
    assert_eq!(Area::from_code("sE").unwrap(), Area::Se);
    assert_eq!(Param::from_code("iv").unwrap(), Param::Iv);
    assert_eq!(Param::from_code("V850").unwrap(), Param::V850);
}

#[test]
fn test_invalid_codes_carry_the_offending_value() {
    match Satellite::from_code("HIMAWARI") {
        Err(NimbusError::InvalidSatellite(code)) => assert_eq!(code, "HIMAWARI"),
        other => panic!("unexpected result: {:?}", other),
    }
    match Area::from_code("XX") {
        Err(NimbusError::InvalidArea(code)) => assert_eq!(code, "XX"),
        other => panic!("unexpected result: {:?}", other),
    }
    match Param::from_code("v1000") {
        Err(NimbusError::InvalidParam(code)) => assert_eq!(code, "v1000"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_wind_levels_are_lowercase_on_the_wire() {
    assert_eq!(Param::V10.code(), "v10");
    assert_eq!(Param::V850.code(), "v850");
    assert_eq!(Param::Iv.code(), "IV");
}

#[test]
fn test_default_param_per_satellite() {
    assert_eq!(Satellite::Goes.default_param(), Param::Iv);
    assert_eq!(Satellite::GoesIm.default_param(), Param::Ch);
    assert_eq!(Satellite::Satelite.default_param(), Param::P);
}

#[test]
fn test_from_str_matches_from_code() {
    let sat: Satellite = "satelite".parse().unwrap();
    assert_eq!(sat, Satellite::Satelite);
    assert_eq!(sat.to_string(), "SATELITE");
}
