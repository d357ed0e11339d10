
use chrono::NaiveDate;
use pawfect_test_utils::prelude::*;

use crate::{
    model::pet::{Gender, RegisterPetRequest, Species},
    server::{
        error::{pet::PetError, shelter::ShelterError, Error},
        service::pet::PetService,
    },
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn register_request(shelter_id: i32) -> RegisterPetRequest {
    RegisterPetRequest {
        name: "Biscuit".to_string(),
        birthdate: "2022-03-14".to_string(),
        gender: Gender::Female,
        species: Species::Dog,
        breed: None,
        description: None,
        image_url: None,
        is_neutered: true,
        has_pedigree: false,
        shelter_id,
    }
}
