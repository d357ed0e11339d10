/// Password accepted by the account password policy
pub const TEST_PASSWORD: &str = "Passw0rd!";

/// Role name granted to users who register a shelter
pub const TEST_SHELTER_OWNER_ROLE: &str = "ShelterOwner";
