//! Centralized enumerations
//!
//! The choice lists the dashboard screens share: sale type, sale state,
//! payment method, and day-of-week labels. Each enum carries its wire
//! code (what the REST API exchanges) and its display label (what the
//! screens render). Unknown wire codes fail deserialization.

use serde::{Deserialize, Serialize};

/// Pricing tier of a sale (minorista = retail, mayorista = wholesale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleType {
    #[default]
    Minorista,
    Mayorista,
}

impl SaleType {
    pub const ALL: [SaleType; 2] = [SaleType::Minorista, SaleType::Mayorista];

    /// Wire code exchanged with the API
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleType::Minorista => "minorista",
            SaleType::Mayorista => "mayorista",
        }
    }

    /// Human-readable label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            SaleType::Minorista => "Minorista",
            SaleType::Mayorista => "Mayorista",
        }
    }
}

impl std::fmt::Display for SaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a sale document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleState {
    #[default]
    Creada,
    PendienteEntrega,
    Entregada,
    Cobrada,
    Cancelada,
}

impl SaleState {
    pub const ALL: [SaleState; 5] = [
        SaleState::Creada,
        SaleState::PendienteEntrega,
        SaleState::Entregada,
        SaleState::Cobrada,
        SaleState::Cancelada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleState::Creada => "creada",
            SaleState::PendienteEntrega => "pendiente_entrega",
            SaleState::Entregada => "entregada",
            SaleState::Cobrada => "cobrada",
            SaleState::Cancelada => "cancelada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaleState::Creada => "Creada",
            SaleState::PendienteEntrega => "Pendiente de Entrega",
            SaleState::Entregada => "Entregada",
            SaleState::Cobrada => "Cobrada",
            SaleState::Cancelada => "Cancelada",
        }
    }
}

impl std::fmt::Display for SaleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Efectivo,
    Tarjeta,
    Transferencia,
    Qr,
    CuentaCorriente,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Efectivo,
        PaymentMethod::Tarjeta,
        PaymentMethod::Transferencia,
        PaymentMethod::Qr,
        PaymentMethod::CuentaCorriente,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "efectivo",
            PaymentMethod::Tarjeta => "tarjeta",
            PaymentMethod::Transferencia => "transferencia",
            PaymentMethod::Qr => "qr",
            PaymentMethod::CuentaCorriente => "cuenta_corriente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "Efectivo",
            PaymentMethod::Tarjeta => "Tarjeta",
            PaymentMethod::Transferencia => "Transferencia",
            PaymentMethod::Qr => "QR",
            PaymentMethod::CuentaCorriente => "Cuenta Corriente",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of week (0 = Sunday, matching the standing-order API)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Domingo = 0,
    Lunes = 1,
    Martes = 2,
    Miercoles = 3,
    Jueves = 4,
    Viernes = 5,
    Sabado = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Domingo,
        Weekday::Lunes,
        Weekday::Martes,
        Weekday::Miercoles,
        Weekday::Jueves,
        Weekday::Viernes,
        Weekday::Sabado,
    ];

    /// Spanish day name, as rendered by the standing-order screens
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Domingo => "Domingo",
            Weekday::Lunes => "Lunes",
            Weekday::Martes => "Martes",
            Weekday::Miercoles => "Miércoles",
            Weekday::Jueves => "Jueves",
            Weekday::Viernes => "Viernes",
            Weekday::Sabado => "Sábado",
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> u8 {
        day as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Weekday::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| format!("invalid day of week: {value}"))
    }
}
