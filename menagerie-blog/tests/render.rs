//! End-to-end render: asset file in, HTML document out.

use std::path::PathBuf;

use menagerie_blog::{assets, derive, page};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/users.json")
}

#[test]
fn renders_the_fixture_dataset() {
    let dataset = assets::load(fixture()).expect("fixture loads");

    assert_eq!(
        derive::animal_index(&dataset),
        ["cat", "dog", "parrot", "axolotl"],
    );

    let html = page::render("Animals lovers blog", &dataset);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Animals lovers blog</h1>"));

    // animal blocks keep first-seen order
    let cat = html.find("<h2>cat</h2>").expect("cat heading");
    let dog = html.find("<h2>dog</h2>").expect("dog heading");
    let parrot = html.find("<h2>parrot</h2>").expect("parrot heading");
    let axolotl = html.find("<h2>axolotl</h2>").expect("axolotl heading");
    assert!(cat < dog && dog < parrot && parrot < axolotl);
}

#[test]
fn ranks_cat_lovers_with_stable_ties() {
    let dataset = assets::load(fixture()).expect("fixture loads");

    let names: Vec<String> = derive::top_users_for_animal(&dataset, "cat")
        .into_iter()
        .map(|user| user.full_name())
        .collect();

    // Grace outranks the 42-point tie; Ada precedes Alan in dataset order
    assert_eq!(names, ["Grace Hopper", "Ada Lovelace", "Alan Turing"]);
}

#[test]
fn inactive_lovers_index_their_animal_but_never_rank() {
    let dataset = assets::load(fixture()).expect("fixture loads");

    // Donald is the only axolotl lover and he is inactive
    assert!(derive::top_users_for_animal(&dataset, "axolotl").is_empty());

    let html = page::render("Animals lovers blog", &dataset);

    assert!(html.contains("<h2>axolotl</h2>"));
    assert!(!html.contains("Donald Knuth"));
}
