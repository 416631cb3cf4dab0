//! Interactive facility menu.
//!
//! The front-end consumer of the core contract: every boolean return is
//! the sole success signal, and every validation error is recoverable -
//! reported and back to the menu, never a crash.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use barkyard::{Daycare, Dog, Owner};

use crate::ui::theme;

pub fn run(mut daycare: Daycare) -> Result<()> {
    loop {
        println!();
        print_header(&daycare);

        let items = vec![
            "[1] Add New Dog",
            "[2] Add New Owner",
            "[3] Check-in Dog",
            "[4] Check-out Dog",
            "[5] Display All Dogs",
            "[6] Display All Owners",
            "[7] Search for Dogs",
            "[0] Exit",
        ];

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => add_dog(&mut daycare)?,
            1 => add_owner(&mut daycare)?,
            2 => check_in(&mut daycare)?,
            3 => check_out(&mut daycare)?,
            4 => display_dogs(&daycare),
            5 => display_owners(&daycare),
            6 => search(&daycare)?,
            _ => {
                println!("Thank you for using {}.", daycare.name());
                return Ok(());
            }
        }
    }
}

fn print_header(daycare: &Daycare) {
    println!("===== DOG DAYCARE MANAGEMENT SYSTEM =====");
    println!("Daycare Name: {}", daycare.name());
    println!("Address: {}", daycare.address());
    println!("Total Dogs: {}", daycare.dog_count());
    println!("Total Owners: {}", daycare.owner_count());
    println!(
        "{}",
        theme::dim(&format!(
            "Activities: {}",
            daycare.available_activities().join(", ")
        ))
    );
    println!();
}

fn add_dog(daycare: &mut Daycare) -> Result<()> {
    let dog_id: String = Input::new().with_prompt("Dog ID").interact_text()?;
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let breed: String = Input::new().with_prompt("Breed").interact_text()?;
    // Typed prompts re-ask on parse failure.
    let age: i32 = Input::new().with_prompt("Age (years)").interact_text()?;
    let weight: f64 = Input::new().with_prompt("Weight (lbs)").interact_text()?;

    let kinds = vec!["Small", "Large", "Standard"];
    let kind = Select::new()
        .with_prompt("Dog type")
        .items(&kinds)
        .default(0)
        .interact()?;

    let dog = match kind {
        0 => {
            let toy: String = Input::new().with_prompt("Toy preference").interact_text()?;
            Dog::small(&dog_id, &name, &breed, age, weight, toy)
        }
        1 => {
            let needs: String = Input::new()
                .with_prompt("Exercise needs (Low/Medium/High)")
                .interact_text()?;
            Dog::large(&dog_id, &name, &breed, age, weight, needs)
        }
        _ => Dog::new(&dog_id, &name, &breed, age, weight),
    };

    match dog {
        Ok(dog) => {
            if daycare.add_dog(dog) {
                println!("{}", theme::success(&format!("Dog {dog_id} added.")));
            } else {
                println!(
                    "{}",
                    theme::failure(&format!("Dog with ID {dog_id} already exists."))
                );
            }
        }
        Err(err) => println!("{}", theme::failure(&format!("Invalid dog data: {err}"))),
    }

    Ok(())
}

fn add_owner(daycare: &mut Daycare) -> Result<()> {
    let owner_id: String = Input::new().with_prompt("Owner ID").interact_text()?;
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let phone: String = Input::new()
        .with_prompt("Phone (###-###-####)")
        .interact_text()?;

    let owner = match Owner::new(&owner_id, &name, &email, &phone) {
        Ok(owner) => owner,
        Err(err) => {
            println!("{}", theme::failure(&format!("Invalid owner data: {err}")));
            return Ok(());
        }
    };

    if !daycare.add_owner(owner) {
        println!(
            "{}",
            theme::failure(&format!("Owner with ID {owner_id} already exists."))
        );
        return Ok(());
    }
    println!("{}", theme::success(&format!("Owner {owner_id} added.")));

    if Confirm::new()
        .with_prompt("Register dogs to this owner?")
        .default(false)
        .interact()?
    {
        display_dogs(daycare);
        let ids: String = Input::new()
            .with_prompt("Dog IDs to register (comma-separated)")
            .allow_empty(true)
            .interact_text()?;

        for dog_id in ids.split(',').map(str::trim).filter(|id| !id.is_empty()) {
            if daycare.register_dog_to_owner(dog_id, &owner_id) {
                println!(
                    "{}",
                    theme::info(&format!("Dog {dog_id} registered to owner {owner_id}."))
                );
            } else {
                println!(
                    "{}",
                    theme::failure(&format!("Could not register dog {dog_id}."))
                );
            }
        }
    }

    Ok(())
}

fn check_in(daycare: &mut Daycare) -> Result<()> {
    let dog_id: String = Input::new().with_prompt("Dog ID").interact_text()?;
    let owner_id: String = Input::new().with_prompt("Owner ID").interact_text()?;

    if daycare.check_in_dog(&dog_id, &owner_id) {
        println!(
            "{}",
            theme::success(&format!("Dog {dog_id} checked in by owner {owner_id}."))
        );
    } else {
        println!("{}", theme::failure("Check-in failed."));
    }
    Ok(())
}

fn check_out(daycare: &mut Daycare) -> Result<()> {
    let dog_id: String = Input::new().with_prompt("Dog ID").interact_text()?;
    let owner_id: String = Input::new().with_prompt("Owner ID").interact_text()?;

    if daycare.check_out_dog(&dog_id, &owner_id) {
        println!(
            "{}",
            theme::success(&format!("Dog {dog_id} checked out by owner {owner_id}."))
        );
    } else {
        println!("{}", theme::failure("Check-out failed."));
    }
    Ok(())
}

fn display_dogs(daycare: &Daycare) {
    let dogs = daycare.get_all_dogs();
    if dogs.is_empty() {
        println!("{}", theme::dim("No dogs found."));
        return;
    }
    println!("\nAll Dogs:");
    for dog in dogs.values() {
        println!("  {}", dog.display_info());
    }
}

fn display_owners(daycare: &Daycare) {
    let owners = daycare.get_all_owners();
    if owners.is_empty() {
        println!("{}", theme::dim("No owners found."));
        return;
    }
    println!("\nAll Owners:");
    for owner in owners.values() {
        println!("  {}", owner.display_info());
    }
}

fn search(daycare: &Daycare) -> Result<()> {
    let options = vec!["By name", "By breed", "Currently checked in"];
    let choice = Select::new()
        .with_prompt("Search")
        .items(&options)
        .default(0)
        .interact()?;

    let results = match choice {
        0 => {
            let keyword: String = Input::new()
                .with_prompt("Name keyword")
                .allow_empty(true)
                .interact_text()?;
            daycare.search_dog_by_name(Some(&keyword))?
        }
        1 => {
            let keyword: String = Input::new()
                .with_prompt("Breed keyword")
                .allow_empty(true)
                .interact_text()?;
            daycare.search_dog_by_breed(Some(&keyword))?
        }
        _ => daycare.get_checked_in_dogs(),
    };

    if results.is_empty() {
        println!("{}", theme::dim("No matching dogs found."));
        return Ok(());
    }

    println!("\nSearch Results:");
    for dog in results.values() {
        println!("  {}", dog.display_info());
    }
    Ok(())
}
