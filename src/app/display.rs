//! # Display Sections
//!
//! Maps a company record plus the copy-feedback state to the labeled rows
//! the renderer shows, grouped the way the popover groups them. Absent
//! values render as "N/A"; a row whose copy acknowledgment is pending
//! renders as "Copiado" instead of its value.

use std::time::Instant;

use crate::app::models::company::CompanyRecord;
use crate::app::models::copy_feedback::CopyFeedback;
use crate::app::models::fields::{CompanyField, FieldId, PartnerField};

/// Placeholder for fields the registry did not return
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown in place of a value while its copy acknowledgment is pending
pub const COPIED: &str = "Copiado";

/// One labeled row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub field: FieldId,
    pub label: &'static str,
    pub value: Option<String>,
}

impl DisplayRow {
    /// The text the renderer shows for this row at `now`
    pub fn presentation(&self, feedback: &CopyFeedback, now: Instant) -> &str {
        if feedback.is_acknowledged(self.field, now) {
            COPIED
        } else {
            self.value.as_deref().unwrap_or(NOT_AVAILABLE)
        }
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<DisplayRow>,
}

fn company_rows(record: &CompanyRecord, fields: &[CompanyField]) -> Vec<DisplayRow> {
    fields
        .iter()
        .map(|field| DisplayRow {
            field: FieldId::Company(*field),
            label: field.label(),
            value: field.resolve(record).map(str::to_string),
        })
        .collect()
}

/// Build the display sections for a record
///
/// The first three sections are always present with every row; the Sócios
/// section appears only when the record lists partners, with a name and
/// role row per partner.
pub fn build_sections(record: &CompanyRecord) -> Vec<Section> {
    let mut sections = vec![
        Section {
            title: "Informações Básicas",
            rows: company_rows(record, &CompanyField::BASIC),
        },
        Section {
            title: "Endereço",
            rows: company_rows(record, &CompanyField::ADDRESS),
        },
        Section {
            title: "Contato",
            rows: company_rows(record, &CompanyField::CONTACT),
        },
    ];

    if !record.qsa.is_empty() {
        let mut rows = Vec::with_capacity(record.qsa.len() * 2);
        for (index, partner) in record.qsa.iter().enumerate() {
            for field in [PartnerField::Nome, PartnerField::Qual] {
                rows.push(DisplayRow {
                    field: FieldId::Partner { index, field },
                    label: field.label(),
                    value: field.resolve(partner).map(str::to_string),
                });
            }
        }
        sections.push(Section {
            title: "Sócios",
            rows,
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::company::PartnerEntry;

    fn sparse_record() -> CompanyRecord {
        CompanyRecord {
            nome: Some("ACME LTDA".into()),
            situacao: Some("ATIVA".into()),
            ..CompanyRecord::default()
        }
    }

    fn row<'a>(sections: &'a [Section], label: &str) -> &'a DisplayRow {
        sections
            .iter()
            .flat_map(|s| &s.rows)
            .find(|r| r.label == label)
            .unwrap_or_else(|| panic!("no row labeled {label}"))
    }

    #[test]
    fn sections_should_show_values_and_not_available_defaults() {
        let sections = build_sections(&sparse_record());
        let feedback = CopyFeedback::new();
        let now = Instant::now();

        assert_eq!(row(&sections, "Nome").presentation(&feedback, now), "ACME LTDA");
        assert_eq!(row(&sections, "Situação").presentation(&feedback, now), "ATIVA");
        assert_eq!(row(&sections, "Email").presentation(&feedback, now), NOT_AVAILABLE);
        assert_eq!(row(&sections, "CEP").presentation(&feedback, now), NOT_AVAILABLE);
    }

    #[test]
    fn sections_should_omit_partners_when_qsa_is_empty() {
        let sections = build_sections(&sparse_record());
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Informações Básicas", "Endereço", "Contato"]);
    }

    #[test]
    fn partners_should_get_name_and_role_rows() {
        let record = CompanyRecord {
            qsa: vec![
                PartnerEntry {
                    nome: Some("MARIA SILVA".into()),
                    qual: Some("49-Sócio-Administrador".into()),
                },
                PartnerEntry {
                    nome: Some("JOAO SOUZA".into()),
                    qual: None,
                },
            ],
            ..CompanyRecord::default()
        };

        let sections = build_sections(&record);
        let partners = sections.iter().find(|s| s.title == "Sócios").unwrap();
        assert_eq!(partners.rows.len(), 4);

        let feedback = CopyFeedback::new();
        let now = Instant::now();
        assert_eq!(partners.rows[0].presentation(&feedback, now), "MARIA SILVA");
        assert_eq!(partners.rows[3].presentation(&feedback, now), NOT_AVAILABLE);
    }

    #[test]
    fn acknowledged_row_should_present_as_copied() {
        let sections = build_sections(&sparse_record());
        let mut feedback = CopyFeedback::new();
        let now = Instant::now();

        let nome = row(&sections, "Nome");
        feedback.mark(nome.field, now);

        assert_eq!(nome.presentation(&feedback, now), COPIED);
        // A different row is unaffected
        assert_eq!(row(&sections, "Situação").presentation(&feedback, now), "ATIVA");
    }
}
