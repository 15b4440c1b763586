//! Price tables. These are the whole of the pricing policy; the calculator
//! only combines them.

use crate::domain::money::Money;
use crate::domain::options::{CleaningFrequency, SquareFootage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOn {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Money,
}

pub const ADD_ON_CATALOG: [AddOn; 6] = [
    AddOn {
        id: "fridge",
        name: "Fridge",
        price: Money::from_dollars(40),
    },
    AddOn {
        id: "oven",
        name: "Oven",
        price: Money::from_dollars(40),
    },
    AddOn {
        id: "cabinets",
        name: "Cabinets",
        price: Money::from_dollars(50),
    },
    AddOn {
        id: "windows-blinds",
        name: "Windows & Blinds",
        price: Money::from_dollars(60),
    },
    AddOn {
        id: "pet-hair",
        name: "Pet Hair",
        price: Money::from_dollars(35),
    },
    AddOn {
        id: "baseboards",
        name: "Baseboards",
        price: Money::from_dollars(30),
    },
];

/// Looks an add-on up by id or display name, ignoring case.
pub fn find_add_on(key: &str) -> Option<&'static AddOn> {
    let key = key.trim();
    ADD_ON_CATALOG
        .iter()
        .find(|a| a.id.eq_ignore_ascii_case(key) || a.name.eq_ignore_ascii_case(key))
}

/// Identity of a selected add-on: the catalog id when it is in the catalog,
/// otherwise the trimmed, lowercased key.
pub fn add_on_key(key: &str) -> String {
    match find_add_on(key) {
        Some(add_on) => add_on.id.to_string(),
        None => key.trim().to_lowercase(),
    }
}

/// First-visit base price for a standard cleaning.
pub const fn base_price(square_footage: SquareFootage) -> Money {
    match square_footage {
        SquareFootage::Under1500 => Money::from_dollars(180),
        SquareFootage::From1500To2000 => Money::from_dollars(210),
        SquareFootage::From2001To2500 => Money::from_dollars(240),
        SquareFootage::From2501To3000 => Money::from_dollars(275),
        SquareFootage::From3001To4000 => Money::from_dollars(320),
        SquareFootage::From4001To5500 => Money::from_dollars(380),
        SquareFootage::Over5500 => Money::from_dollars(450),
    }
}

/// Recurring discount in whole percent. `None` means the plan does not recur.
pub const fn discount_percent(frequency: CleaningFrequency) -> Option<u32> {
    match frequency {
        CleaningFrequency::OneTime => None,
        CleaningFrequency::Weekly => Some(15),
        CleaningFrequency::BiWeekly => Some(10),
        CleaningFrequency::Monthly => Some(5),
    }
}
