//! bridge/src/io/api/mappers/location_mapper.rs

use crate::sdk::models::location::{Address, Location};
use shared::{AddressApi, LocationApi};

use super::metadata::to_hash_map;

/// Mapper from SDK locations to their API representation.
pub struct LocationMapper;

impl LocationMapper {
    pub fn to_api(location: Location) -> LocationApi {
        LocationApi {
            address: location.address.map(Self::address_to_api),
            display_name: location.display_name,
            id: location.id,
            livemode: location.livemode,
            metadata: to_hash_map(location.metadata),
        }
    }

    pub fn address_to_api(address: Address) -> AddressApi {
        AddressApi {
            city: address.city,
            country: address.country,
            line1: address.line1,
            line2: address.line2,
            postal_code: address.postal_code,
            state: address.state,
        }
    }

    /// Convert a page of locations, preserving order
    pub fn to_api_list(locations: Vec<Location>) -> Vec<LocationApi> {
        locations.into_iter().map(Self::to_api).collect()
    }
}
