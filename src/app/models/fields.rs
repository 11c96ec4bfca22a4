//! # Display Fields
//!
//! Identifiers for every value the UI can show and copy, with their labels
//! and the lookup from a [`CompanyRecord`]. Partner rows are addressed by
//! position in the QSA list, so two partners' flags never alias.

use crate::app::models::company::{CompanyRecord, PartnerEntry};

/// Flat company fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Nome,
    Fantasia,
    Situacao,
    Tipo,
    Abertura,
    CapitalSocial,
    Logradouro,
    Numero,
    Municipio,
    Uf,
    Cep,
    Telefone,
    Email,
}

/// Fields of one partner entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartnerField {
    Nome,
    Qual,
}

/// Identifier for any copyable row on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Company(CompanyField),
    Partner { index: usize, field: PartnerField },
}

impl CompanyField {
    /// Fields in the "Informações Básicas" section
    pub const BASIC: [CompanyField; 6] = [
        CompanyField::Nome,
        CompanyField::Fantasia,
        CompanyField::Situacao,
        CompanyField::Tipo,
        CompanyField::Abertura,
        CompanyField::CapitalSocial,
    ];

    /// Fields in the "Endereço" section
    pub const ADDRESS: [CompanyField; 5] = [
        CompanyField::Logradouro,
        CompanyField::Numero,
        CompanyField::Municipio,
        CompanyField::Uf,
        CompanyField::Cep,
    ];

    /// Fields in the "Contato" section
    pub const CONTACT: [CompanyField; 2] = [CompanyField::Telefone, CompanyField::Email];

    /// Row label for this field
    pub fn label(&self) -> &'static str {
        match self {
            CompanyField::Nome => "Nome",
            CompanyField::Fantasia => "Nome Fantasia",
            CompanyField::Situacao => "Situação",
            CompanyField::Tipo => "Tipo",
            CompanyField::Abertura => "Data de Abertura",
            CompanyField::CapitalSocial => "Capital Social",
            CompanyField::Logradouro => "Logradouro",
            CompanyField::Numero => "Número",
            CompanyField::Municipio => "Cidade",
            CompanyField::Uf => "Estado",
            CompanyField::Cep => "CEP",
            CompanyField::Telefone => "Telefone",
            CompanyField::Email => "Email",
        }
    }

    /// Look the field up in a record
    pub fn resolve<'a>(&self, record: &'a CompanyRecord) -> Option<&'a str> {
        let value = match self {
            CompanyField::Nome => &record.nome,
            CompanyField::Fantasia => &record.fantasia,
            CompanyField::Situacao => &record.situacao,
            CompanyField::Tipo => &record.tipo,
            CompanyField::Abertura => &record.abertura,
            CompanyField::CapitalSocial => &record.capital_social,
            CompanyField::Logradouro => &record.logradouro,
            CompanyField::Numero => &record.numero,
            CompanyField::Municipio => &record.municipio,
            CompanyField::Uf => &record.uf,
            CompanyField::Cep => &record.cep,
            CompanyField::Telefone => &record.telefone,
            CompanyField::Email => &record.email,
        };
        value.as_deref()
    }
}

impl PartnerField {
    /// Row label for this field
    pub fn label(&self) -> &'static str {
        match self {
            PartnerField::Nome => "Nome",
            PartnerField::Qual => "Cargo",
        }
    }

    /// Look the field up in a partner entry
    pub fn resolve<'a>(&self, partner: &'a PartnerEntry) -> Option<&'a str> {
        match self {
            PartnerField::Nome => partner.nome.as_deref(),
            PartnerField::Qual => partner.qual.as_deref(),
        }
    }
}

impl FieldId {
    /// Look the field up in a record, `None` if absent or out of range
    pub fn resolve<'a>(&self, record: &'a CompanyRecord) -> Option<&'a str> {
        match self {
            FieldId::Company(field) => field.resolve(record),
            FieldId::Partner { index, field } => {
                record.qsa.get(*index).and_then(|p| field.resolve(p))
            }
        }
    }
}
