use chrono::NaiveDate;

use super::*;
use crate::gif::{
    AreaMeasurement, ConstructionPhase, Container, Country, Currency, Property, UseType,
    Valuation, ValuationType1, ValuationType2,
};

/// Minimal document holding a single element at `path`
fn single_element(path: &str, text: &str) -> String {
    let names: Vec<&str> = path.split('/').collect();
    let mut xml = String::new();
    for name in &names {
        xml.push_str(&format!("<{name}>"));
    }
    xml.push_str(text);
    for name in names.iter().rev() {
        xml.push_str(&format!("</{name}>"));
    }
    xml
}

/// The single property of a container, with its valuations split off
fn only_record(container: &Container) -> (Property, Valuation) {
    assert_eq!(container.data.len(), 1);
    let mut property = container.data.properties.values().next().unwrap().clone();
    assert_eq!(property.valuations.len(), 1);
    let valuation = property.valuations.values().next().unwrap().clone();
    property.valuations.clear();
    (property, valuation)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_valuation_field(path: &str, text: &str, set: impl FnOnce(&mut Valuation)) {
    let outcome = decode_str(&single_element(path, text)).unwrap();
    let (property, valuation) = only_record(&outcome.container);

    let mut expected = Valuation::new();
    set(&mut expected);
    assert_eq!(valuation, expected, "path {path}");
    assert_eq!(property, Property::new(), "path {path}");
    assert!(outcome.container.meta.created.is_none());
}

#[test]
fn test_each_text_path_sets_one_field() {
    assert_valuation_field(paths::SUPPLIER_SHORT, "EXP1", |v| {
        v.expert_id = Some("EXP1".into())
    });
    assert_valuation_field(paths::SUPPLIER_NAME, "Gutachter GmbH", |v| {
        v.expert_name = Some("Gutachter GmbH".into())
    });
    assert_valuation_field(paths::STREET, "Main St", |v| {
        v.address.street = Some("Main St".into())
    });
    assert_valuation_field(paths::POST_CODE, "12345", |v| {
        v.address.zip = Some("12345".into())
    });
    assert_valuation_field(paths::TOWN, "Berlin", |v| {
        v.address.city = Some("Berlin".into())
    });
    assert_valuation_field(paths::OWNER, "Fonds A", |v| v.owner = Some("Fonds A".into()));
    assert_valuation_field(paths::FLOORS, "EG-3.OG", |v| {
        v.floor_description = Some("EG-3.OG".into())
    });
    assert_valuation_field(paths::GROUND_LEASE_REMARKS, "bis 2080", |v| {
        v.ground_lease_remarks = Some("bis 2080".into())
    });
    assert_valuation_field(paths::ADDITIONAL_INFORMATION, "Denkmalschutz", |v| {
        v.note = Some("Denkmalschutz".into())
    });
}

#[test]
fn test_each_converted_path_sets_one_field() {
    assert_valuation_field(paths::AREAL_UNIT, "qm", |v| {
        v.area_measurement = Some(AreaMeasurement::Sqm)
    });
    assert_valuation_field(paths::COUNTRY, "DE", |v| v.address.country = Some(Country::DE));
    assert_valuation_field(paths::LONGITUDE, "13.405", |v| {
        v.address.longitude = Some(13.405)
    });
    assert_valuation_field(paths::LATITUDE, "52.52", |v| v.address.latitude = Some(52.52));
    assert_valuation_field(paths::CURRENCY, "EUR", |v| v.currency = Some(Currency::EUR));
    assert_valuation_field(paths::SHARE_ANCILLARY_USE, "0.25", |v| {
        v.use_type_secondary_share = Some(0.25)
    });
    assert_valuation_field(paths::SHARE_MAIN_USE, "0.75", |v| {
        v.use_type_primary_share = Some(0.75)
    });
    assert_valuation_field(paths::GROUND_LEASE, "true", |v| v.ground_lease = Some(true));
    assert_valuation_field(paths::MAINTENANCE_BACKLOG, "FALSE", |v| {
        v.maintenance_backlog = Some(false)
    });
    assert_valuation_field(paths::SINGLE_TENANT, "True", |v| v.single_tenant = Some(true));
    assert_valuation_field(paths::DATE_EXCHANGE_RATE, "2016-02-29", |v| {
        v.exchange_rate_date = Some(date(2016, 2, 29))
    });
    assert_valuation_field(paths::DATE_OF_APPRAISAL, "2016-03-31", |v| {
        v.valid_from = Some(date(2016, 3, 31))
    });
    assert_valuation_field(paths::DATE_OF_CHANGE_REMAINING_LIFE, "2010-01-01", |v| {
        v.change_date_for_remaining_economic_life = Some(date(2010, 1, 1))
    });
    assert_valuation_field(paths::DATE_OF_PURCHASE, "2005-07-15", |v| {
        v.purchase_date = Some(date(2005, 7, 15))
    });
    assert_valuation_field(paths::DATE_OF_SALE, "2020-12-31", |v| {
        v.sale_date = Some(date(2020, 12, 31))
    });
    assert_valuation_field(paths::ORIGINAL_YEAR_OF_CONSTRUCTION, "1975", |v| {
        v.construction_date = Some(date(1975, 1, 1))
    });
    assert_valuation_field(paths::MAIN_TYPE_OF_USE, "Buero", |v| {
        v.use_type_primary = Some(UseType::Office)
    });
    assert_valuation_field(paths::ANCILLARY_TYPE_OF_USE, "Garage/TG", |v| {
        v.use_type_secondary = Some(UseType::Parking)
    });
    assert_valuation_field(paths::STATE_OF_COMPLETION, "F", |v| {
        v.construction_phase = Some(ConstructionPhase::Completed)
    });
    assert_valuation_field(paths::REBASE_TYPE_1, "Fondsgutachten", |v| {
        v.valuation_type1 = Some(ValuationType1::Fund)
    });
    assert_valuation_field(paths::REBASE_TYPE_2, "N", |v| {
        v.valuation_type2 = Some(ValuationType2::Revaluation)
    });
}

#[test]
fn test_unmapped_codes_leave_fields_unset() {
    for path in [
        paths::FIT_OUT_QUALITY,
        paths::LOCATION_QUALITY,
        paths::STRUCTURAL_CONDITION,
        paths::TYPE_OF_OWNERSHIP,
    ] {
        for code in ["U", "E", "N", "V"] {
            let outcome = decode_str(&single_element(path, code)).unwrap();
            let (_, valuation) = only_record(&outcome.container);
            assert!(valuation.is_empty(), "{path} = {code}");
            assert_eq!(outcome.notes.len(), 1);
            assert_eq!(outcome.notes[0].kind, NoteKind::Unset);
        }
    }
}

#[test]
fn test_address_text_sets_both_labels() {
    let outcome = decode_str(&single_element(paths::ADDRESS_TEXT, "Haus am See")).unwrap();
    let (property, valuation) = only_record(&outcome.container);
    assert_eq!(property.label.as_deref(), Some("Haus am See"));
    assert_eq!(valuation.address.label.as_deref(), Some("Haus am See"));
}

#[test]
fn test_object_number_keys_record() {
    let outcome = decode_str(&single_element(paths::OBJECT_NUMBER, "OBJ-7")).unwrap();
    let property = outcome.container.data.property("OBJ-7").unwrap();
    assert_eq!(property.object_id_sender.as_deref(), Some("OBJ-7"));
    assert_eq!(property.object_id_receiver.as_deref(), Some("OBJ-7"));
    assert!(property.valuations["OBJ-7"].is_empty());
}

#[test]
fn test_completion_date_sets_created() {
    let outcome =
        decode_str(&single_element(paths::COMPLETION_DATE, "2016-03-01T10:00:00")).unwrap();
    assert_eq!(
        outcome.container.meta.created,
        Some(date(2016, 3, 1).and_hms_opt(10, 0, 0).unwrap())
    );
    let (_, valuation) = only_record(&outcome.container);
    assert!(valuation.is_empty());
}

#[test]
fn test_ignored_and_unknown_paths_set_nothing() {
    for path in [
        paths::DATE,
        paths::QUALITY_DATE_OF_APPRAISAL,
        "ValXML/BIISValuationData/ValuationResults/MarketValue",
        "ValXML/Unknown/Deeply/Nested",
        "Other/Root",
    ] {
        let outcome = decode_str(&single_element(path, "not a date")).unwrap();
        let (property, valuation) = only_record(&outcome.container);
        assert_eq!(property, Property::new(), "path {path}");
        assert!(valuation.is_empty(), "path {path}");
        assert!(outcome.is_complete());
    }
}

#[test]
fn test_ignored_paths_are_not_read() {
    let xml = "<ValXML><Date><Day>15</Day></Date>\
        <DataSupplier><Short>EXP1</Short></DataSupplier>\
        <BIISValuationData><ValuationResults>\
        <QualityDateOfAppraisal><Grade/>A</QualityDateOfAppraisal>\
        <Currency>EUR</Currency>\
        </ValuationResults></BIISValuationData></ValXML>";

    let outcome = decode_str(xml).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.expert_id.as_deref(), Some("EXP1"));
    assert_eq!(valuation.currency, Some(Currency::EUR));
    assert!(outcome.is_complete());
}

#[test]
fn test_self_closing_ignored_path() {
    let xml = "<ValXML><Date/><DataSupplier><Short>EXP1</Short></DataSupplier></ValXML>";
    let outcome = decode_str(xml).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.expert_id.as_deref(), Some("EXP1"));
}

const REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ValXML>
  <Date>2016-02-15</Date>
  <CompletionDate>2016-03-01T10:00:00</CompletionDate>
  <DataSupplier>
    <Short>EXP1</Short>
    <Name>Expert One</Name>
  </DataSupplier>
  <BIISValuationData>
    <General>
      <ArealUnit>qm</ArealUnit>
      <Address>
        <Street>Main St</Street>
        <PostCode>12345</PostCode>
        <Town>Berlin</Town>
        <Country>DE</Country>
      </Address>
      <ObjNoOwner>OBJ-001</ObjNoOwner>
    </General>
    <ValuationResults>
      <Currency>EUR</Currency>
      <MainTypeOfUse>Wohnen</MainTypeOfUse>
      <FitOutQuality>E</FitOutQuality>
      <MarketValue>1250000.00</MarketValue>
    </ValuationResults>
  </BIISValuationData>
</ValXML>
"#;

#[test]
fn test_end_to_end_report() {
    let outcome = decode_str(REPORT).unwrap();
    let container = &outcome.container;

    assert_eq!(container.data.len(), 1);
    let property = container.data.property("OBJ-001").unwrap();
    assert_eq!(property.valuations.len(), 1);
    let valuation = &property.valuations["OBJ-001"];

    assert_eq!(valuation.expert_id.as_deref(), Some("EXP1"));
    assert_eq!(valuation.expert_name.as_deref(), Some("Expert One"));
    assert_eq!(valuation.address.street.as_deref(), Some("Main St"));
    assert_eq!(valuation.address.zip.as_deref(), Some("12345"));
    assert_eq!(valuation.address.city.as_deref(), Some("Berlin"));
    assert_eq!(valuation.address.country, Some(Country::DE));
    assert_eq!(valuation.area_measurement, Some(AreaMeasurement::Sqm));
    assert_eq!(valuation.currency, Some(Currency::EUR));
    assert_eq!(valuation.use_type_primary, Some(UseType::Residential));
    assert_eq!(valuation.interior_quality, None);
    assert!(valuation.key_figures.is_empty());
    assert_eq!(
        container.meta.created,
        Some(date(2016, 3, 1).and_hms_opt(10, 0, 0).unwrap())
    );

    assert_eq!(outcome.notes.len(), 1);
    assert_eq!(outcome.notes[0].path, paths::FIT_OUT_QUALITY);
    assert_eq!(outcome.notes[0].token, "E");
}

#[test]
fn test_last_object_number_wins() {
    let xml = r#"<ValXML><BIISValuationData><General>
        <ObjNoOwner>FIRST</ObjNoOwner>
        <Owner>A</Owner>
        <ObjNoOwner>SECOND</ObjNoOwner>
        <Owner>B</Owner>
    </General></BIISValuationData></ValXML>"#;

    let outcome = decode_str(xml).unwrap();
    assert_eq!(outcome.container.data.len(), 1);
    assert!(outcome.container.data.property("FIRST").is_none());
    let property = outcome.container.data.property("SECOND").unwrap();
    assert_eq!(property.valuations["SECOND"].owner.as_deref(), Some("B"));
}

#[test]
fn test_malformed_date_keeps_partial_record() {
    let xml = r#"<ValXML><BIISValuationData>
        <General>
          <Address><Town>Berlin</Town></Address>
          <ObjNoOwner>OBJ-9</ObjNoOwner>
        </General>
        <ValuationResults>
          <DateOfAppraisal>31.03.2016</DateOfAppraisal>
          <Currency>EUR</Currency>
        </ValuationResults>
    </BIISValuationData></ValXML>"#;

    let failure = decode_str(xml).unwrap_err();
    match &failure.error {
        BiisError::Convert { path, token, source } => {
            assert_eq!(path, paths::DATE_OF_APPRAISAL);
            assert_eq!(token, "31.03.2016");
            assert!(matches!(source, ConvertError::InvalidDate(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(failure.error.path(), Some(paths::DATE_OF_APPRAISAL));

    let property = failure.partial.data.property("OBJ-9").unwrap();
    let valuation = &property.valuations["OBJ-9"];
    assert_eq!(valuation.address.city.as_deref(), Some("Berlin"));
    assert_eq!(valuation.valid_from, None);
    assert_eq!(valuation.currency, None);
}

#[test]
fn test_bad_decimal_is_conversion_error() {
    let failure = decode_str(&single_element(paths::LATITUDE, "52,52")).unwrap_err();
    assert!(matches!(
        failure.error,
        BiisError::Convert {
            source: ConvertError::InvalidDecimal(_),
            ..
        }
    ));
}

#[test]
fn test_unknown_currency_is_conversion_error() {
    let failure = decode_str(&single_element(paths::CURRENCY, "XYZ")).unwrap_err();
    assert!(matches!(
        failure.error,
        BiisError::Convert {
            source: ConvertError::UnknownCurrency(_),
            ..
        }
    ));
}

#[test]
fn test_withdrawn_and_special_currencies() {
    for (code, expected) in [
        ("HRK", Currency::HRK),
        ("LTL", Currency::LTL),
        ("SIT", Currency::SIT),
        ("SKK", Currency::SKK),
        ("EEK", Currency::EEK),
        ("XAU", Currency::XAU),
        ("XDR", Currency::XDR),
        ("CHE", Currency::CHE),
        ("BYR", Currency::BYR),
        ("VEF", Currency::VEF),
    ] {
        let outcome = decode_str(&single_element(paths::CURRENCY, code)).unwrap();
        let (_, valuation) = only_record(&outcome.container);
        assert_eq!(valuation.currency, Some(expected), "code {code}");
    }
}

#[test]
fn test_unknown_country_is_note() {
    let outcome = decode_str(&single_element(paths::COUNTRY, "Germany")).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.address.country, None);
    assert_eq!(
        outcome.notes,
        vec![DecodeNote {
            path: paths::COUNTRY.to_string(),
            token: "Germany".to_string(),
            kind: NoteKind::Unset,
        }]
    );
}

#[test]
fn test_self_closing_elements() {
    let xml = r#"<ValXML><BIISValuationData>
        <General><ArealUnit/><Address><Country/></Address></General>
        <ValuationResults><GroundLease/><MainTypeOfUse/></ValuationResults>
    </BIISValuationData></ValXML>"#;

    let outcome = decode_str(xml).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.area_measurement, Some(AreaMeasurement::NotSpecified));
    assert_eq!(valuation.use_type_primary, Some(UseType::NotSpecified));
    assert_eq!(valuation.address.country, None);
    assert_eq!(valuation.ground_lease, None);
    assert!(outcome.is_complete());
}

#[test]
fn test_text_is_stored_verbatim_and_unescaped() {
    let xml = r#"<ValXML><BIISValuationData><General>
        <Owner>  M&amp;M Immobilien  </Owner>
        <Address><Street><![CDATA[Haupt <Str.> 1]]></Street></Address>
    </General></BIISValuationData></ValXML>"#;

    let outcome = decode_str(xml).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.owner.as_deref(), Some("  M&M Immobilien  "));
    assert_eq!(valuation.address.street.as_deref(), Some("Haupt <Str.> 1"));
}

#[test]
fn test_whitespace_around_comments_and_cdata_is_kept() {
    let xml = r#"<ValXML><BIISValuationData><General><Address>
        <Town>Bad <!-- c --> Homburg</Town>
        <Street>Haupt <![CDATA[Str.]]> 1</Street>
        <PostCode>61<?pi x?>348</PostCode>
    </Address></General></BIISValuationData></ValXML>"#;

    let outcome = decode_str(xml).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.address.city.as_deref(), Some("Bad  Homburg"));
    assert_eq!(valuation.address.street.as_deref(), Some("Haupt Str. 1"));
    assert_eq!(valuation.address.zip.as_deref(), Some("61348"));
}

#[test]
fn test_trimmed_text() {
    let xml = single_element(paths::TOWN, "  Bad <!-- c --> Homburg ");
    let outcome = BiisDecoder::new(xml.as_bytes())
        .trim_text(true)
        .decode()
        .unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.address.city.as_deref(), Some("Bad  Homburg"));
}

#[test]
fn test_indented_numbers_parse_without_trimming() {
    let xml = single_element(paths::LATITUDE, "\n   52.52\n  ");
    let outcome = decode_str(&xml).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.address.latitude, Some(52.52));
}

#[test]
fn test_namespace_prefixes_are_ignored() {
    let xml = r#"<b:ValXML xmlns:b="urn:biis"><b:DataSupplier><b:Short>EXP1</b:Short></b:DataSupplier></b:ValXML>"#;
    let outcome = decode_str(xml).unwrap();
    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.expert_id.as_deref(), Some("EXP1"));
}

#[test]
fn test_nested_element_in_leaf() {
    let failure =
        decode_str("<ValXML><DataSupplier><Short>EX<b>P</b>1</Short></DataSupplier></ValXML>")
            .unwrap_err();
    match failure.error {
        BiisError::NestedElement { path, child } => {
            assert_eq!(path, paths::SUPPLIER_SHORT);
            assert_eq!(child, "b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_truncated_document() {
    let failure = decode_str("<ValXML><DataSupplier><Short>EXP1</Short><Name>Exp").unwrap_err();
    assert!(matches!(
        failure.error,
        BiisError::UnexpectedEof { .. } | BiisError::XmlError(_)
    ));
    let (_, valuation) = only_record(&failure.partial);
    assert_eq!(valuation.expert_id.as_deref(), Some("EXP1"));
    assert_eq!(valuation.expert_name, None);
}

#[test]
fn test_mismatched_end_tag() {
    let failure = decode_str("<ValXML><DataSupplier></Short></ValXML>").unwrap_err();
    assert!(matches!(failure.error, BiisError::XmlError(_)));
}

#[test]
fn test_key_figure_table_extension() {
    let xml = r#"<ValXML><BIISValuationData><ValuationResults>
        <MarketValue>1250000.00</MarketValue>
        <CapitalizationRate>4.5</CapitalizationRate>
        <GrossRentalIncome>80000</GrossRentalIncome>
    </ValuationResults></BIISValuationData></ValXML>"#;

    let table = DispatchTable::standard()
        .with_key_figure("MarketValue")
        .with_key_figure("CapitalizationRate");
    let outcome = BiisDecoder::new(xml.as_bytes())
        .with_table(table)
        .decode()
        .unwrap();

    let (_, valuation) = only_record(&outcome.container);
    assert_eq!(valuation.key_figures.len(), 2);
    assert_eq!(valuation.key_figures["MarketValue"], 1_250_000.0);
    assert_eq!(valuation.key_figures["CapitalizationRate"], 4.5);
}

#[test]
fn test_empty_table_maps_nothing() {
    let outcome = BiisDecoder::new(REPORT.as_bytes())
        .with_table(DispatchTable::empty())
        .decode()
        .unwrap();
    let (property, valuation) = only_record(&outcome.container);
    assert_eq!(property, Property::new());
    assert!(valuation.is_empty());
}

#[test]
fn test_decode_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xml");
    std::fs::write(&path, REPORT).unwrap();

    let outcome = decode_file(&path).unwrap();
    assert!(outcome.container.data.property("OBJ-001").is_some());

    let missing = decode_file(dir.path().join("missing.xml")).unwrap_err();
    assert!(matches!(missing.error, BiisError::IoError(_)));
    assert!(missing.partial.data.is_empty());
}
