//! Build context of a single decode pass

use log::{debug, trace, warn};

use super::convert;
use super::dispatch::FieldAction;
use super::error::{BiisError, ConvertError};
use super::outcome::{DecodeNote, NoteKind};
use crate::gif::{
    AreaMeasurement, ConstructionPhase, Container, Country, InteriorQuality, Meta,
    ObjectCondition, OwnershipType, Property, RetailLocationType, UseType, Valuation,
    ValuationType1, ValuationType2,
};

/// The record under construction: one property with one valuation and its
/// address.
///
/// Every mapped element writes straight into this record; a document with
/// two records overwrites the fields of the first.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    meta: Meta,
    property: Property,
    valuation: Valuation,
    notes: Vec<DecodeNote>,
}

impl RecordAssembler {
    /// Start an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes collected so far
    pub fn notes(&self) -> &[DecodeNote] {
        &self.notes
    }

    /// Apply `action` to the text of the element at `path`
    pub fn apply(&mut self, path: &str, action: &FieldAction, text: &str) -> Result<(), BiisError> {
        let wrap = |source: ConvertError| BiisError::Convert {
            path: path.to_string(),
            token: text.to_string(),
            source,
        };
        let token = Some(text);

        match action {
            FieldAction::Ignore => {
                trace!("{} ignored", path);
                return Ok(());
            }

            FieldAction::Created => {
                self.meta.created = Some(convert::date_time(text).map_err(wrap)?);
            }
            FieldAction::ExpertId => self.valuation.expert_id = Some(text.to_string()),
            FieldAction::ExpertName => self.valuation.expert_name = Some(text.to_string()),

            FieldAction::AreaMeasurement => {
                let unit = AreaMeasurement::from_biis(text);
                self.note_defaulted(path, text, unit.is_none());
                self.valuation.area_measurement = Some(convert::area_measurement(token));
            }
            FieldAction::Street => self.valuation.address.street = Some(text.to_string()),
            FieldAction::PostCode => self.valuation.address.zip = Some(text.to_string()),
            FieldAction::City => self.valuation.address.city = Some(text.to_string()),
            FieldAction::Country => {
                if !text.trim().is_empty() {
                    match Country::from_biis(text) {
                        Some(country) => self.valuation.address.country = Some(country),
                        None => self.note(path, text, NoteKind::Unset),
                    }
                }
            }
            FieldAction::AddressLabel => {
                self.property.label = Some(text.to_string());
                self.valuation.address.label = Some(text.to_string());
            }
            FieldAction::Owner => self.valuation.owner = Some(text.to_string()),
            FieldAction::ObjectId => self.property.set_object_id(text),
            FieldAction::Longitude => {
                self.valuation.address.longitude = convert::decimal(token).map_err(wrap)?;
            }
            FieldAction::Latitude => {
                self.valuation.address.latitude = convert::decimal(token).map_err(wrap)?;
            }

            FieldAction::Currency => {
                self.valuation.currency = Some(convert::currency(text).map_err(wrap)?);
            }
            FieldAction::UseTypeSecondaryShare => {
                self.valuation.use_type_secondary_share = convert::decimal(token).map_err(wrap)?;
            }
            FieldAction::UseTypePrimaryShare => {
                self.valuation.use_type_primary_share = convert::decimal(token).map_err(wrap)?;
            }
            FieldAction::GroundLease => {
                self.valuation.ground_lease = self.unset_unless(path, text, convert::boolean(token));
            }
            FieldAction::MaintenanceBacklog => {
                self.valuation.maintenance_backlog =
                    self.unset_unless(path, text, convert::boolean(token));
            }
            FieldAction::SingleTenant => {
                self.valuation.single_tenant =
                    self.unset_unless(path, text, convert::boolean(token));
            }
            FieldAction::ExchangeRateDate => {
                self.valuation.exchange_rate_date = Some(convert::date(text).map_err(wrap)?);
            }
            FieldAction::ValidFrom => {
                self.valuation.valid_from = Some(convert::date(text).map_err(wrap)?);
            }
            FieldAction::ChangeDateForRemainingEconomicLife => {
                self.valuation.change_date_for_remaining_economic_life =
                    Some(convert::date(text).map_err(wrap)?);
            }
            FieldAction::PurchaseDate => {
                self.valuation.purchase_date = Some(convert::date(text).map_err(wrap)?);
            }
            FieldAction::SaleDate => {
                self.valuation.sale_date = Some(convert::date(text).map_err(wrap)?);
            }
            FieldAction::ConstructionDate => {
                self.valuation.construction_date = Some(convert::date(text).map_err(wrap)?);
            }
            FieldAction::UseTypePrimary => {
                self.note_defaulted(path, text, UseType::from_biis(text).is_none());
                self.valuation.use_type_primary = Some(convert::use_type(token));
            }
            FieldAction::UseTypeSecondary => {
                self.note_defaulted(path, text, UseType::from_biis(text).is_none());
                self.valuation.use_type_secondary = Some(convert::use_type(token));
            }
            FieldAction::InteriorQuality => {
                self.valuation.interior_quality =
                    self.unset_unless(path, text, InteriorQuality::from_biis(text));
            }
            FieldAction::RetailLocation => {
                self.valuation.retail_location =
                    self.unset_unless(path, text, RetailLocationType::from_biis(text));
            }
            FieldAction::OwnershipType => {
                self.valuation.ownership_type =
                    self.unset_unless(path, text, OwnershipType::from_biis(text));
            }
            FieldAction::Condition => {
                self.valuation.condition =
                    self.unset_unless(path, text, ObjectCondition::from_biis(text));
            }
            FieldAction::ConstructionPhase => {
                self.valuation.construction_phase =
                    self.unset_unless(path, text, ConstructionPhase::from_biis(text));
            }
            FieldAction::ValuationType1 => {
                self.valuation.valuation_type1 =
                    self.unset_unless(path, text, ValuationType1::from_biis(text));
            }
            FieldAction::ValuationType2 => {
                self.valuation.valuation_type2 =
                    self.unset_unless(path, text, ValuationType2::from_biis(text));
            }
            FieldAction::FloorDescription => {
                self.valuation.floor_description = Some(text.to_string());
            }
            FieldAction::GroundLeaseRemarks => {
                self.valuation.ground_lease_remarks = Some(text.to_string());
            }
            FieldAction::Note => self.valuation.note = Some(text.to_string()),

            FieldAction::KeyFigure(name) => {
                if let Some(value) = convert::decimal(token).map_err(wrap)? {
                    self.valuation.key_figures.insert(name.clone(), value);
                }
            }
        }

        debug!("{} -> {:?} = {:?}", path, action, text);
        Ok(())
    }

    /// Commit the record into a fresh container.
    ///
    /// The valuation is keyed by the property's object id, the property by
    /// the same id; a record without object number is stored under `""`.
    pub fn commit(self) -> (Container, Vec<DecodeNote>) {
        let Self {
            meta,
            mut property,
            valuation,
            notes,
        } = self;

        let key = property.key();
        property.valuations.insert(key.clone(), valuation);

        let mut container = Container::new();
        container.meta = meta;
        container.data.properties.insert(key, property);
        (container, notes)
    }

    fn unset_unless<T>(&mut self, path: &str, text: &str, value: Option<T>) -> Option<T> {
        if value.is_none() && !text.trim().is_empty() {
            self.note(path, text, NoteKind::Unset);
        }
        value
    }

    fn note_defaulted(&mut self, path: &str, text: &str, defaulted: bool) {
        if defaulted && !text.trim().is_empty() {
            self.note(path, text, NoteKind::Defaulted);
        }
    }

    fn note(&mut self, path: &str, text: &str, kind: NoteKind) {
        warn!("Unrecognized value {:?} at {} ({:?})", text, path, kind);
        self.notes.push(DecodeNote::new(path, text, kind));
    }
}
