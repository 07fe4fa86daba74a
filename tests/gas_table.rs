use std::fs;
use std::path::PathBuf;

use mfc_flow::{FlowError, GasTable};

const TABLE: &str = "\
Gas Name,Symbol,Specific Heat,Correction Factor
Air,Air,0.240,1.030
Chlorine,Cl2,0.1144,0.86
Nitrogen,N2,0.2485,1.00
Nitrogen Duplicate,N2,0.9999,9.99
";

fn table() -> GasTable {
    GasTable::parse(TABLE).unwrap()
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mfc-flow-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════
//  Lookup
// ═══════════════════════════════════════════════════════════════════

#[test]
fn lookup_ignores_case() {
    let t = table();
    let upper = t.lookup("AIR");
    let lower = t.lookup("air");
    let mixed = t.lookup("Air");
    assert!(upper.found);
    assert_eq!(upper, lower);
    assert_eq!(lower, mixed);
}

#[test]
fn symbol_and_name_give_same_record() {
    let t = table();
    let by_name = t.lookup("chlorine");
    let by_symbol = t.lookup("CL2");
    assert!(by_name.found && by_symbol.found);
    assert_eq!(by_name.record, by_symbol.record);
    assert_eq!(by_name.record.specific_heat, 0.1144);
    assert_eq!(by_name.record.correction_factor, 0.86);
}

#[test]
fn first_match_wins() {
    let n2 = table().lookup("n2");
    assert_eq!(n2.record.name, "Nitrogen");
    assert_eq!(n2.record.correction_factor, 1.00);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(table().lookup("  chlorine \n").found);
}

#[test]
fn unknown_gas_falls_back() {
    let miss = table().lookup("Unobtainium");
    assert!(!miss.found);
    assert_eq!(miss.record.name, "Unobtainium");
    assert_eq!(miss.record.specific_heat, 0.240);
    assert_eq!(miss.record.correction_factor, 1.030);
}

#[test]
fn partial_names_do_not_match() {
    assert!(!table().lookup("Chlor").found);
    assert!(table().get("Nitro").is_none());
}

#[test]
fn blank_identifier_falls_back_even_with_blank_symbols() {
    let text = "Gas Name,Symbol,Specific Heat,Correction Factor\nMystery Mix,,0.5,0.5\n";
    let t = GasTable::parse(text).unwrap();
    for id in ["", "   ", "\t"] {
        let lookup = t.lookup(id);
        assert!(!lookup.found, "{id:?} must not match a blank symbol");
        assert_eq!(lookup.record.specific_heat, 0.240);
        assert_eq!(lookup.record.correction_factor, 1.030);
    }
    assert!(t.get("").is_none());
    assert!(t.lookup("mystery mix").found);
}

#[test]
fn bundled_table_has_common_gases() {
    let t = GasTable::bundled().unwrap();
    for id in ["Air", "N2", "oxygen", "Ar", "helium", "CO2", "Cl2", "SF6"] {
        assert!(t.lookup(id).found, "{id} should be in the bundled table");
    }
    let air = t.lookup("air").record;
    assert_eq!(air.specific_heat, 0.240);
    assert_eq!(air.correction_factor, 1.030);
}

// ═══════════════════════════════════════════════════════════════════
//  Loading
// ═══════════════════════════════════════════════════════════════════

#[test]
fn load_from_file() {
    let path = temp_file("ok.csv", TABLE);
    let t = GasTable::load(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(t.len(), 4);
}

#[test]
fn missing_file_is_a_load_error() {
    let err = GasTable::load("/no/such/dir/gas_data.csv").unwrap_err();
    assert!(matches!(err, FlowError::DataLoad(_)));
}

#[test]
fn missing_column_is_a_load_error() {
    let path = temp_file("nocf.csv", "Gas Name,Symbol,Specific Heat\nAir,Air,0.240\n");
    let err = GasTable::load(&path).unwrap_err();
    fs::remove_file(&path).ok();
    match err {
        FlowError::DataLoad(msg) => assert!(msg.contains("Correction Factor"), "{msg}"),
        other => panic!("expected DataLoad, got {other:?}"),
    }
}

#[test]
fn empty_source_is_a_load_error() {
    assert!(matches!(GasTable::parse(""), Err(FlowError::DataLoad(_))));
    assert!(matches!(GasTable::parse("\n  \n"), Err(FlowError::DataLoad(_))));
}

#[test]
fn non_numeric_value_names_the_line() {
    let text = "Gas Name,Symbol,Specific Heat,Correction Factor\nAir,Air,0.240,1.030\n\nFoo,Fo,warm,1.0\n";
    match GasTable::parse(text).unwrap_err() {
        FlowError::DataLoad(msg) => {
            assert!(msg.contains("line 4"), "{msg}");
            assert!(msg.contains("Specific Heat"), "{msg}");
        }
        other => panic!("expected DataLoad, got {other:?}"),
    }
}

#[test]
fn short_row_is_a_load_error() {
    let text = "Gas Name,Symbol,Specific Heat,Correction Factor\nAir,Air,0.240\n";
    assert!(matches!(GasTable::parse(text), Err(FlowError::DataLoad(_))));
}

#[test]
fn blank_gas_name_is_a_load_error() {
    let text = "Gas Name,Symbol,Specific Heat,Correction Factor\nAir,Air,0.240,1.030\n  ,Xx,0.5,0.5\n";
    match GasTable::parse(text).unwrap_err() {
        FlowError::DataLoad(msg) => {
            assert!(msg.contains("line 3"), "{msg}");
            assert!(msg.contains("Gas Name"), "{msg}");
        }
        other => panic!("expected DataLoad, got {other:?}"),
    }
}

#[test]
fn infinite_value_is_a_load_error() {
    let text = "Gas Name,Symbol,Specific Heat,Correction Factor\nAir,Air,inf,1.0\n";
    assert!(matches!(GasTable::parse(text), Err(FlowError::DataLoad(_))));
}

#[test]
fn quoted_names_may_contain_commas() {
    let text = "Gas Name,Symbol,Specific Heat,Correction Factor\n\"Freon-14, CF4\",CF4,0.1654,0.42\n";
    let t = GasTable::parse(text).unwrap();
    assert_eq!(t.lookup("freon-14, cf4").record.symbol, "CF4");
}
