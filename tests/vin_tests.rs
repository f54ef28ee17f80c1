use vindecode::*;

// --- Decoding ---

#[test]
fn decode_passenger_car_2003() {
    let d = decode("5GZCZ43D13S812715").unwrap();
    assert_eq!(d.wmi, "5GZ");
    assert_eq!(d.vds, "CZ43D1");
    assert_eq!(d.vis, "3S812715");
    assert_eq!(d.region, Region::NorthAmerica);
    assert_eq!(d.country, "United States");
    assert_eq!(d.year, 2003);
    assert_eq!(d.sequential_number, "812715");
    assert!(!d.less_than_500_built_per_year);
}

#[test]
fn decode_lowercase_input() {
    assert_eq!(
        decode("5gzcz43d13s812715").unwrap(),
        decode("5GZCZ43D13S812715").unwrap()
    );
}

#[test]
fn decoded_display_snapshot() {
    let d = decode("5GZCZ43D13S812715").unwrap();
    insta::assert_snapshot!(d.to_string(), @r"
    VIN:        5GZCZ43D13S812715
    WMI:        5GZ
    VDS:        CZ43D1
    VIS:        3S812715
    Region:     North America
    Country:    United States
    Year:       2003
    Sequential: 812715
    ");
}

#[test]
fn decoded_serializes_to_json() {
    let d = decode("JHMCM56557C404453").unwrap();
    let value = serde_json::to_value(&d).unwrap();
    assert_eq!(value["vin"], "JHMCM56557C404453");
    assert_eq!(value["region"], "asia");
    assert_eq!(value["country"], "Japan");
    assert_eq!(value["year"], 2007);
    assert_eq!(value["less_than_500_built_per_year"], false);
}

// --- Model year ---

#[test]
fn same_year_code_two_cycles() {
    // position 7 numeric
    assert_eq!(Vin::new("1M8GDM9AXAP042788").year().unwrap(), 1980);
    // position 7 alphabetic
    assert_eq!(Vin::new("1M8GDMBAXAP042788").year().unwrap(), 2010);
}

#[test]
fn year_cycle_spans() {
    assert_eq!(
        Vin::new("JHMCM56557C404453").year_cycle().unwrap(),
        YearCycle::Pre2010
    );
    assert_eq!(YearCycle::Pre2010.span(), 1980..=2009);
}

// --- Origin ---

#[test]
fn both_unknown_country_paths_return_sentinel() {
    // '7' has a row (Oceania) but no code set contains '7'
    let nested_miss = Vin::new("7AT0H65N7X4123456");
    assert_eq!(nested_miss.region(), Region::Oceania);
    assert_eq!(nested_miss.origin().unwrap().country, None);
    assert_eq!(nested_miss.country(), "Unknown");

    // 'G' has no row at all
    let top_miss = Vin::new("GAT0H65N7X4123456");
    assert_eq!(top_miss.origin(), Err(VinError::UnknownOriginCode('G')));
    assert_eq!(top_miss.country(), "Unknown");

    assert_eq!(nested_miss.country(), top_miss.country());
}

// --- Low volume manufacturers ---

#[test]
fn low_volume_flag() {
    let low = Vin::new("1G9AB12345C123456");
    assert!(low.less_than_500_built_per_year().unwrap());
    assert_eq!(low.sequential_number().unwrap(), "456");

    for raw in ["1G8AB12345C123456", "1GXAB12345C123456"] {
        assert!(!Vin::new(raw).less_than_500_built_per_year().unwrap());
    }
}

// --- Validation ---

#[test]
fn reference_vin_passes_both_checks() {
    assert!(is_valid_vin("1M8GDM9AXKP042788"));
    assert!(verify_checksum("1M8GDM9AXKP042788"));
    assert_eq!(Vin::new("1M8GDM9AXKP042788").check_digit().unwrap(), 'X');
}

#[test]
fn structure_and_checksum_can_disagree() {
    let vin = "1M8GDM9A3KP042788";
    assert!(is_valid_vin(vin));
    assert!(!verify_checksum(vin));
}

#[test]
fn checksum_pass_does_not_imply_structural_pass() {
    // year code 'U' with a correct check digit
    assert!(verify_checksum("1M8GDM9A6UP042788"));
    assert!(!is_valid_vin("1M8GDM9A6UP042788"));

    // checksum trims, structural rules do not
    assert!(verify_checksum(" 1M8GDM9AXKP042788"));
    assert!(!is_valid_vin(" 1M8GDM9AXKP042788"));
}

#[test]
fn checksum_ignores_case_and_whitespace() {
    assert_eq!(
        verify_checksum(" 1m8gdm9ax1kp42395 "),
        verify_checksum("1M8GDM9AX1KP42395")
    );
    assert_eq!(
        verify_checksum(" 1m8gdm9axkp042788 "),
        verify_checksum("1M8GDM9AXKP042788")
    );
}

#[test]
fn checksum_expected_character() {
    assert_eq!(calculate_check_digit("1M8GDM9AX1KP42395"), Ok('2'));
    assert!(verify_checksum("1M8GDM9A21KP42395"));
}

#[test]
fn violation_messages() {
    assert_eq!(
        validate_structure("SHORT").unwrap_err().to_string(),
        "VIN must be 17 characters, got 5"
    );
    let err = validate_structure("1M8GDM9AXKP04278I").unwrap_err();
    assert_eq!(
        err.to_string(),
        "character 'I' at position 16 is not allowed in a VIN"
    );
}

// --- Repair ---

#[test]
fn repair_then_revalidate() {
    let typed = "1m8gdm9axkpo42788";
    assert!(!is_valid_vin(typed));
    let fixed = repair(typed);
    assert_eq!(fixed, "1M8GDM9AXKP042788");
    assert!(is_valid_vin(&fixed));
    assert!(verify_checksum(&fixed));
}
