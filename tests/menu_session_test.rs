use anyhow::Result;
use pet_inventory::{
    Gender, InMemoryInventory, InventoryApp, Kind, PetRepository, PetTraits, Terminal,
};
use std::io::Cursor;

type TestApp = InventoryApp<Terminal<Cursor<String>, Vec<u8>>, InMemoryInventory>;

fn app_with_input(lines: &[&str]) -> TestApp {
    let mut input = lines.join("\n");
    input.push('\n');
    InventoryApp::new(
        Terminal::new(Cursor::new(input), Vec::new()),
        InMemoryInventory::new(),
    )
}

/// Runs a whole session and returns the transcript and the final inventory.
fn run_session(lines: &[&str]) -> Result<(String, InMemoryInventory)> {
    let mut app = app_with_input(lines);
    app.run()?;
    let (terminal, inventory) = app.into_parts();
    Ok((String::from_utf8(terminal.into_output())?, inventory))
}

#[test]
fn test_dog_scenario_lists_the_added_pet() -> Result<()> {
    let (output, inventory) =
        run_session(&["1", "Dog", "Male", "Rex", "Ana", "Shiba", "y", "2", "3"])?;

    assert_eq!(inventory.len(), 1);
    let pet = &inventory.all()[0];
    assert_eq!(pet.kind(), Kind::Dog);
    assert_eq!(pet.gender(), Gender::Male);
    assert_eq!(pet.name(), "Rex");
    assert_eq!(pet.owner(), "Ana");
    assert_eq!(
        pet.traits(),
        &PetTraits::Dog {
            breed: "Shiba".to_string()
        }
    );

    assert!(output.contains("You are about to add the following pet:\n"));
    assert!(output.contains("Pet added successfully.\n"));
    let summary = "Dog: Name = Rex, Gender = Male, Owner = Ana, Breed = Shiba\n";
    // Once in the confirmation preview, once in the listing.
    assert_eq!(output.matches(summary).count(), 2);
    Ok(())
}

#[test]
fn test_cat_declined_leaves_inventory_empty() -> Result<()> {
    let (output, inventory) =
        run_session(&["1", "Cat", "Female", "Mimi", "Bo", "y", "n", "2", "3"])?;

    assert!(inventory.is_empty());
    let summary = "Cat: Name = Mimi, Gender = Female, Owner = Bo, Longhaired = True\n";
    assert!(output.contains(summary));
    assert!(output.contains("Pet addition cancelled.\n"));
    assert!(output.contains("No pets in the inventory.\n"));
    Ok(())
}

#[test]
fn test_every_kind_can_be_added() -> Result<()> {
    let script = [
        ["1", "dog", "male", "Rex", "Ana", "Shiba", "y"].as_slice(),
        ["1", "CAT", "FEMALE", "Mimi", "Bo", "n", "Y"].as_slice(),
        ["1", "Lizard", "Male", "Zed", "Kim", "N", "y"].as_slice(),
        ["1", "bIrD", "Female", "Tweety", "Sam", "y", "y"].as_slice(),
        ["3"].as_slice(),
    ]
    .concat();
    let (_, inventory) = run_session(&script)?;

    let summaries: Vec<String> = inventory.all().iter().map(|p| p.to_string()).collect();
    assert_eq!(
        summaries,
        vec![
            "Dog: Name = Rex, Gender = Male, Owner = Ana, Breed = Shiba",
            "Cat: Name = Mimi, Gender = Female, Owner = Bo, Longhaired = False",
            "Lizard: Name = Zed, Gender = Male, Owner = Kim, Can Fly = False",
            "Bird: Name = Tweety, Gender = Female, Owner = Sam, Can Fly = True",
        ]
    );
    Ok(())
}

#[test]
fn test_non_yes_confirmations_store_nothing() -> Result<()> {
    for answer in ["n", "", "maybe", "yes"] {
        let (output, inventory) =
            run_session(&["1", "Bird", "Male", "Kiwi", "Lee", "n", answer, "3"])?;
        assert!(inventory.is_empty(), "answer {:?} should decline", answer);
        assert!(output.contains("Pet addition cancelled."));
        assert!(!output.contains("An error occurred"));
    }
    Ok(())
}

#[test]
fn test_empty_listing() -> Result<()> {
    let (output, inventory) = run_session(&["2", "3"])?;
    assert!(inventory.is_empty());
    assert!(output.contains("Choose an option: No pets in the inventory.\n"));
    Ok(())
}

#[test]
fn test_validation_errors_abort_the_flow() -> Result<()> {
    let cases: [(&[&str], &str); 7] = [
        (&["1", "Fish", "3"], "Invalid pet kind!."),
        (&["1", "Dog", "Robot", "3"], "Invalid gender!"),
        (&["1", "Dog", "Male", "   ", "3"], "Pet name cannot be empty."),
        (&["1", "Dog", "Male", "Rex", "", "3"], "Owner cannot be empty."),
        (&["1", "Dog", "Male", "Rex", "Ana", " ", "3"], "Breed cannot be empty."),
        (&["1", "Cat", "Female", "Mimi", "Bo", "maybe", "3"], "Invalid input!"),
        (&["1", "Lizard", "Male", "Zed", "Kim", "yes", "3"], "Invalid input!"),
    ];

    for (lines, message) in cases {
        let (output, inventory) = run_session(lines)?;
        assert!(inventory.is_empty());
        assert!(
            output.contains(&format!("An error occurred: {}\n", message)),
            "expected {:?} in output:\n{}",
            message,
            output
        );
        // Back at the menu, and the next input is the menu choice.
        assert!(output.ends_with("Choose an option: "));
        assert!(!output.contains("Do you want to proceed?"));
    }
    Ok(())
}

#[test]
fn test_invalid_menu_choice() -> Result<()> {
    let (output, _) = run_session(&["9", "add", "3"])?;
    assert_eq!(output.matches("Invalid choice, try again.\n").count(), 2);
    let menu = "1. Add Pet\n2. List All Pets\n3. Exit\n";
    assert_eq!(output.matches(menu).count(), 3);
    Ok(())
}

#[test]
fn test_exit_stops_reading_input() -> Result<()> {
    let (output, inventory) =
        run_session(&["3", "1", "Dog", "Male", "Rex", "Ana", "Shiba", "y"])?;
    assert!(inventory.is_empty());
    assert!(!output.contains("Enter what kind of pet"));
    Ok(())
}

#[test]
fn test_end_of_input_ends_the_session() -> Result<()> {
    let mut app = InventoryApp::new(
        Terminal::new(Cursor::new(String::new()), Vec::new()),
        InMemoryInventory::new(),
    );
    app.run()?;
    assert!(app.inventory().is_empty());

    // Input running out mid-flow reads as a blank answer.
    let mut app = InventoryApp::new(
        Terminal::new(Cursor::new("1\nDog\nMale\n".to_string()), Vec::new()),
        InMemoryInventory::new(),
    );
    app.run()?;
    let (terminal, inventory) = app.into_parts();
    let output = String::from_utf8(terminal.into_output())?;
    assert!(inventory.is_empty());
    assert!(output.contains("An error occurred: Pet name cannot be empty."));
    Ok(())
}

#[test]
fn test_listing_preserves_insertion_order() -> Result<()> {
    let script = [
        ["1", "Bird", "Female", "B", "Sam", "y", "y"].as_slice(),
        ["1", "Dog", "Male", "A", "Ana", "Mutt", "y"].as_slice(),
        ["2", "3"].as_slice(),
    ]
    .concat();
    let (output, _) = run_session(&script)?;

    let listing_start = output.rfind("Choose an option: ").unwrap_or(0);
    let tail = &output[..listing_start];
    let bird = tail.rfind("Bird: Name = B,").unwrap();
    let dog = tail.rfind("Dog: Name = A,").unwrap();
    assert!(bird < dog);
    Ok(())
}

#[test]
fn test_invalid_utf8_input_keeps_the_session_alive() -> Result<()> {
    let input = b"\xc3\n1\nDog\nMale\n\xff\xfe\nAna\nShiba\ny\n1\n\xff\n2\n3\n".to_vec();
    let mut app = InventoryApp::new(
        Terminal::new(Cursor::new(input), Vec::new()),
        InMemoryInventory::new(),
    );
    app.run()?;

    let (terminal, inventory) = app.into_parts();
    let output = String::from_utf8(terminal.into_output())?;

    // Undecodable menu choice is just an unknown choice.
    assert!(output.contains("Invalid choice, try again.\n"));
    // Undecodable kind fails validation; undecodable name is kept as replacement text.
    assert!(output.contains("An error occurred: Invalid pet kind!.\n"));
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.all()[0].name(), "\u{fffd}\u{fffd}");
    let summary = "Dog: Name = \u{fffd}\u{fffd}, Gender = Male, Owner = Ana, Breed = Shiba\n";
    assert!(output.contains(summary));
    assert!(output.ends_with("Choose an option: "));
    Ok(())
}
