//! Example demonstrating the namespace service
//!
//! Builds a small tree, moves a file between folders and writes content,
//! printing the tree with sizes after each step.

use core_types::EntityKind;
use ns_console::commands::CommandHandler;
use services_namespace::NamespaceOperations;

fn main() {
    println!("=== Namespace Demo ===\n");

    let mut handler = CommandHandler::default();

    println!("1. Creating folders, a zip file and a text file...");
    handler
        .create(EntityKind::Folder, "C:", "my_folder")
        .expect("Failed to create my_folder");
    handler
        .create(EntityKind::Folder, "C:", "my_folder2")
        .expect("Failed to create my_folder2");
    handler
        .create(EntityKind::ZipFile, "C:\\my_folder", "my_zip")
        .expect("Failed to create my_zip");
    handler
        .create(EntityKind::TextFile, "C:\\my_folder", "my_txt_file")
        .expect("Failed to create my_txt_file");

    let zip = handler
        .namespace()
        .resolve("C:\\my_folder\\my_zip")
        .expect("my_zip should exist");
    let parent = zip
        .parent()
        .and_then(|id| handler.namespace().get(id))
        .expect("my_zip should have a parent");
    println!("   Parent of my_zip => {}\n", parent.name());
    println!("{}\n", handler.tree(None).expect("Failed to render tree"));

    println!("2. Moving my_txt_file into my_folder2...");
    let output = handler
        .mv(
            "C:\\my_folder\\my_txt_file",
            "C:\\my_folder2\\my_moved_txt_file",
        )
        .expect("Failed to move my_txt_file");
    println!("   {}\n", output);
    println!("{}\n", handler.tree(None).expect("Failed to render tree"));

    println!("3. Writing content...");
    handler
        .create(EntityKind::TextFile, "C:\\my_folder", "my_txt_file2")
        .expect("Failed to create my_txt_file2");
    handler
        .create(EntityKind::TextFile, "C:\\my_folder\\my_zip", "my_txt_file3")
        .expect("Failed to create my_txt_file3");
    handler
        .write("C:\\my_folder\\my_txt_file2", "This is the content of my file")
        .expect("Failed to write my_txt_file2");
    handler
        .write(
            "C:\\my_folder\\my_zip\\my_txt_file3",
            "This is the content of my other file",
        )
        .expect("Failed to write my_txt_file3");
    handler
        .write("C:\\my_folder2\\my_moved_txt_file", "Content")
        .expect("Failed to write my_moved_txt_file");

    for path in [
        "C:\\my_folder\\my_txt_file2",
        "C:\\my_folder\\my_zip\\my_txt_file3",
    ] {
        let content = handler.cat(path).expect("Failed to read file");
        println!("   {} => {}", path, content);
    }
    println!();
    println!("{}\n", handler.tree(None).expect("Failed to render tree"));

    println!("4. Checking cached sizes against the tree...");
    match handler.namespace().check_consistency() {
        Ok(()) => println!("   Consistent\n"),
        Err(e) => println!("   {}\n", e),
    }

    println!("=== Demo Complete ===");
}
