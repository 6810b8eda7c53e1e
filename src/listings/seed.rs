use crate::models::{ListingType, Location, Property, PropertyType, Seller};
use chrono::{DateTime, TimeZone, Utc};

const UNSPLASH_QUERY: &str = "ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?{}", photo, UNSPLASH_QUERY)
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn listed(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("seed dates are valid calendar dates")
}

fn usa(address: &str, city: &str, state: &str, zip_code: &str) -> Location {
    Location {
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        country: "USA".to_string(),
        latitude: None,
        longitude: None,
    }
}

fn seller(id: &str, name: &str, email: &str, phone: &str) -> Seller {
    Seller {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

/// The six sample listings the store starts with
pub fn sample_listings() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Modern Apartment with Ocean View".to_string(),
            description: "Beautiful modern apartment with stunning ocean views. This spacious unit features high-end finishes, an open floor plan, and a private balcony overlooking the water. The building offers amenities including a fitness center, pool, and 24-hour doorman.".to_string(),
            price: 450_000.0,
            bedrooms: 2,
            bathrooms: 2.0,
            size: 1200.0,
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Sale,
            features: labels(&["Ocean View", "Balcony", "Central AC", "Fitness Center", "Pool"]),
            images: vec![
                unsplash("photo-1522708323590-d24dbb6b0267"),
                unsplash("photo-1560448204-e02f11c3d0e2"),
                unsplash("photo-1484154218962-a197022b5858"),
            ],
            location: usa("123 Oceanview Ave", "Miami", "FL", "33139"),
            listed_date: listed(2023, 5, 15),
            seller: seller("seller1", "Ocean Realty Group", "contact@oceanrealty.com", "(305) 555-1234"),
        },
        Property {
            id: "2".to_string(),
            title: "Luxury Suburban Family Home".to_string(),
            description: "Gorgeous family home in a prestigious suburb. This home features a gourmet kitchen with top-of-the-line appliances, hardwood floors throughout, a spacious backyard with a built-in BBQ, and a three-car garage.".to_string(),
            price: 850_000.0,
            bedrooms: 4,
            bathrooms: 3.5,
            size: 2800.0,
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            features: labels(&["Backyard", "Garage", "Fireplace", "Hardwood Floors", "Stainless Steel Appliances"]),
            images: vec![
                unsplash("photo-1600596542815-ffad4c1539a9"),
                unsplash("photo-1600585154340-be6161a56a0c"),
                unsplash("photo-1560440021-33f9b867899d"),
            ],
            location: usa("456 Maple St", "Scottsdale", "AZ", "85251"),
            listed_date: listed(2023, 6, 2),
            seller: seller("seller2", "Premier Homes", "info@premierhomes.com", "(480) 555-9876"),
        },
        Property {
            id: "3".to_string(),
            title: "Downtown Loft with City Views".to_string(),
            description: "Stylish urban loft in the heart of downtown. Features exposed brick walls, high ceilings, large windows with city views, and modern finishes. Walking distance to restaurants, shops, and entertainment.".to_string(),
            price: 2_500.0,
            bedrooms: 1,
            bathrooms: 1.0,
            size: 950.0,
            property_type: PropertyType::Condo,
            listing_type: ListingType::Rent,
            features: labels(&["City View", "Exposed Brick", "High Ceilings", "Stainless Steel Appliances", "Washer/Dryer"]),
            images: vec![
                unsplash("photo-1560448075-bb485b067938"),
                unsplash("photo-1609347744403-2cb4dac4e2c1"),
                unsplash("photo-1560448204-603b3fc33ddc"),
            ],
            location: usa("789 Urban Ave, Unit 5B", "Chicago", "IL", "60611"),
            listed_date: listed(2023, 7, 10),
            seller: seller("seller3", "Urban Living Properties", "rentals@urbanliving.com", "(312) 555-4321"),
        },
        Property {
            id: "4".to_string(),
            title: "Waterfront Property with Private Dock".to_string(),
            description: "Exclusive waterfront property with breathtaking views and private boat dock. This stunning home offers luxurious living spaces, floor-to-ceiling windows, a gourmet kitchen, and multiple outdoor entertaining areas.".to_string(),
            price: 1_250_000.0,
            bedrooms: 5,
            bathrooms: 4.0,
            size: 4200.0,
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            features: labels(&["Waterfront", "Private Dock", "Pool", "Outdoor Kitchen", "Home Theater"]),
            images: vec![
                unsplash("photo-1564013799919-ab600027ffc6"),
                unsplash("photo-1600607687644-c7f34b5063c7"),
                unsplash("photo-1600566752355-35792bedcfea"),
            ],
            location: usa("123 Lakefront Dr", "Lake Tahoe", "NV", "89449"),
            listed_date: listed(2023, 4, 20),
            seller: seller("seller4", "Luxury Lake Properties", "sales@luxurylake.com", "(775) 555-8765"),
        },
        Property {
            id: "5".to_string(),
            title: "Cozy Studio in Historic District".to_string(),
            description: "Charming studio apartment in the heart of the historic district. Recently renovated with modern amenities while preserving historic character. Walkable to cafes, shops, and public transportation.".to_string(),
            price: 1_200.0,
            bedrooms: 0,
            bathrooms: 1.0,
            size: 550.0,
            property_type: PropertyType::Apartment,
            listing_type: ListingType::Rent,
            features: labels(&["Historic Building", "Renovated", "Hardwood Floors", "High Ceilings", "Pet Friendly"]),
            images: vec![
                unsplash("photo-1556912172-45b7abe8b7e1"),
                unsplash("photo-1630699144867-57639aae9dae"),
                unsplash("photo-1560185009-5bf9f2849488"),
            ],
            location: usa("321 Heritage Ln, Apt 2C", "Boston", "MA", "02108"),
            listed_date: listed(2023, 7, 5),
            seller: seller("seller5", "Historic District Rentals", "rentals@historicdistrict.com", "(617) 555-3456"),
        },
        Property {
            id: "6".to_string(),
            title: "Mountain View Cabin Retreat".to_string(),
            description: "Rustic yet modern cabin with panoramic mountain views. Features a stone fireplace, vaulted ceilings, large deck, and updated kitchen. Perfect for year-round vacation home or rental property.".to_string(),
            price: 375_000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            size: 1800.0,
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            features: labels(&["Mountain View", "Fireplace", "Deck", "Updated Kitchen", "Hiking Trails"]),
            images: vec![
                unsplash("photo-1518780664697-55e3ad937233"),
                unsplash("photo-1604014838811-4ae1722e5a2d"),
                unsplash("photo-1542718610-a1d656d1884c"),
            ],
            location: usa("456 Alpine Way", "Aspen", "CO", "81611"),
            listed_date: listed(2023, 6, 15),
            seller: seller("seller6", "Mountain Properties LLC", "info@mountainproperties.com", "(970) 555-6789"),
        },
    ]
}
