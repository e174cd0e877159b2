//! Recursive mapping of nested object graphs.

use litemapper::{MapperConfig, map, map_with};
use test_helpers::models::{
    Address, AddressDto, Contact, ContactDto, Employee, EmployeeDto, home_address, sample_employee,
    work_address,
};

fn contact_at_home() -> Contact {
    Contact {
        name: "John Doe".to_owned(),
        age: 30,
        home_address: Some(home_address()),
        work_address: None,
    }
}

#[test]
fn nested_objects_map_field_by_field() -> anyhow::Result<()> {
    let dto: ContactDto = map(&contact_at_home())?;

    assert_eq!(dto.name, "John Doe");
    assert_eq!(dto.age, 30);
    let home = dto.home_address.expect("present in the source");
    assert_eq!(home.street, "123 Main St");
    assert_eq!(home.city, "New York");
    assert_eq!(home.country, "USA");
    assert_eq!(dto.work_address, None);
    Ok(())
}

#[test]
fn every_nested_field_maps_independently() -> anyhow::Result<()> {
    let contact = Contact {
        name: "Jane Smith".to_owned(),
        age: 25,
        home_address: Some(Address {
            street: "456 Oak Ave".to_owned(),
            city: "Los Angeles".to_owned(),
            country: "USA".to_owned(),
        }),
        work_address: Some(work_address()),
    };

    let dto: ContactDto = map(&contact)?;

    assert_eq!(dto.name, "Jane Smith");
    let home = dto.home_address.expect("present in the source");
    assert_eq!(home.street, "456 Oak Ave");
    let work = dto.work_address.expect("present in the source");
    assert_eq!(work.street, "789 Business Blvd");
    Ok(())
}

#[test]
fn absent_nested_sources_stay_absent() -> anyhow::Result<()> {
    let contact = Contact {
        name: "Bob Johnson".to_owned(),
        age: 40,
        home_address: None,
        work_address: None,
    };

    let dto: ContactDto = map(&contact)?;

    assert_eq!(dto.name, "Bob Johnson");
    assert_eq!(dto.age, 40);
    // Absent means absent, not a default-constructed empty address.
    assert_eq!(dto.home_address, None);
    assert_eq!(dto.work_address, None);
    Ok(())
}

#[test]
fn ignoring_a_nested_field_leaves_it_absent() -> anyhow::Result<()> {
    let mut config = MapperConfig::new();
    config
        .create_map::<Contact, ContactDto>()
        .ignore("work_address")?;

    let contact = Contact {
        name: "Alice Brown".to_owned(),
        age: 35,
        home_address: Some(home_address()),
        work_address: Some(work_address()),
    };
    let dto: ContactDto = map_with(&contact, &config)?;

    assert_eq!(dto.name, "Alice Brown");
    assert!(dto.home_address.is_some());
    assert_eq!(dto.work_address, None);
    Ok(())
}

#[test]
fn deep_graphs_map_transitively() -> anyhow::Result<()> {
    let dto: EmployeeDto = map(&sample_employee())?;

    assert_eq!(dto.name, "John Developer");
    let company = dto.company.expect("present in the source");
    assert_eq!(company.name, "Tech Corp");
    let head_office = company.head_office.expect("present in the source");
    assert_eq!(head_office.street, "100 Tech Street");
    assert_eq!(head_office.city, "Silicon Valley");
    let home = dto.home_address.expect("present in the source");
    assert_eq!(home.street, "200 Home Ave");
    Ok(())
}

#[test]
fn nested_pairs_consult_the_same_registry() -> anyhow::Result<()> {
    let mut config = MapperConfig::new();
    // Only the nested pair is configured; the outer pair has no rule.
    config
        .create_map::<Address, AddressDto>()
        .ignore("country")?;

    let dto: ContactDto = map_with(&contact_at_home(), &config)?;

    let home = dto.home_address.expect("present in the source");
    assert_eq!(home.city, "New York");
    assert_eq!(home.country, "");
    Ok(())
}

#[test]
fn a_transform_may_replace_a_whole_nested_field() -> anyhow::Result<()> {
    let mut config = MapperConfig::new();
    config
        .create_map::<Contact, ContactDto>()
        .for_member("work_address", |contact: &Contact| {
            contact.home_address.as_ref().map(|home| AddressDto {
                street: home.street.clone(),
                city: home.city.clone(),
                country: home.country.clone(),
            })
        })?;

    let dto: ContactDto = map_with(&contact_at_home(), &config)?;

    let work = dto.work_address.expect("populated by the transform");
    assert_eq!(work.street, "123 Main St");
    Ok(())
}
