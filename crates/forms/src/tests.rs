use super::*;
use ::dom::Document;
use ::dom::dom_utils::add_class;

fn keys(id: Option<&str>, name: Option<&str>) -> FormKeys {
    FormKeys {
        id: id.map(str::to_string),
        name: name.map(str::to_string),
    }
}

#[test]
fn lookup_by_form_id_and_name() {
    let mut doc = Document::new();
    let form = doc.create_element("form");
    let field = doc.create_element("mn-number");
    let mut index = FormIndex::new();

    index.register(form, keys(Some("formID"), Some("formName")), "price", field);

    assert_eq!(index.lookup_by_id("formID", "price"), Some(field));
    assert_eq!(index.lookup_by_name("formName", "price"), Some(field));
    assert_eq!(index.form_by_id("formID"), Some(form));
    assert_eq!(index.form_by_name("formName"), Some(form));
    assert_eq!(index.lookup_by_id("formID", "other"), None);
    assert_eq!(index.lookup_by_id("nope", "price"), None);
}

#[test]
fn last_registration_wins_and_loser_cannot_evict() {
    let mut doc = Document::new();
    let form = doc.create_element("form");
    let a = doc.create_element("mn-number");
    let b = doc.create_element("mn-number");
    let mut index = FormIndex::new();
    let k = keys(Some("f"), None);

    index.register(form, k.clone(), "amount", a);
    index.register(form, k.clone(), "amount", b);
    assert_eq!(index.lookup_by_id("f", "amount"), Some(b));

    assert!(!index.unregister(form, "amount", a));
    assert_eq!(index.lookup_by_id("f", "amount"), Some(b));
    assert!(index.unregister(form, "amount", b));
    assert_eq!(index.lookup_by_id("f", "amount"), None);
}

#[test]
fn rename_moves_the_field() {
    let mut doc = Document::new();
    let form = doc.create_element("form");
    let field = doc.create_element("mn-number");
    let mut index = FormIndex::new();
    let k = keys(Some("f"), Some("n"));

    index.register(form, k.clone(), "old", field);
    index.rename(form, k, "old", "new", field);

    assert_eq!(index.lookup_by_name("n", "old"), None);
    assert_eq!(index.lookup_by_name("n", "new"), Some(field));
    assert_eq!(index.registry(form).map(|r| r.keys()), Some(vec!["new"]));
}

#[test]
fn empty_form_is_pruned_with_its_keys() {
    let mut doc = Document::new();
    let form = doc.create_element("form");
    let field = doc.create_element("mn-number");
    let mut index = FormIndex::new();

    index.register(form, keys(Some("f"), Some("n")), "x", field);
    assert_eq!(index.form_count(), 1);
    index.unregister(form, "x", field);

    assert_eq!(index.form_count(), 0);
    assert_eq!(index.form_by_id("f"), None);
    assert_eq!(index.form_by_name("n"), None);
}

#[test]
fn form_rekey_drops_stale_id() {
    let mut doc = Document::new();
    let form = doc.create_element("form");
    let a = doc.create_element("mn-number");
    let b = doc.create_element("mn-number");
    let mut index = FormIndex::new();

    index.register(form, keys(Some("before"), None), "a", a);
    index.register(form, keys(Some("after"), None), "b", b);

    assert_eq!(index.form_by_id("before"), None);
    assert_eq!(index.lookup_by_id("after", "a"), Some(a));
    assert_eq!(index.lookup_by_id("after", "b"), Some(b));
}

#[test]
fn two_forms_keep_separate_tables() {
    let mut doc = Document::new();
    let f1 = doc.create_element("form");
    let f2 = doc.create_element("form");
    let a = doc.create_element("mn-number");
    let b = doc.create_element("mn-number");
    let mut index = FormIndex::new();

    index.register(f1, keys(Some("one"), None), "qty", a);
    index.register(f2, keys(Some("two"), None), "qty", b);

    assert_eq!(index.lookup_by_id("one", "qty"), Some(a));
    assert_eq!(index.lookup_by_id("two", "qty"), Some(b));
}

#[test]
fn dom_helpers_resolve_owner_and_submitted_state() {
    let mut doc = Document::new();
    let root = doc.root();
    let form = doc.create_element("form");
    let div = doc.create_element("div");
    let field = doc.create_element("mn-number");
    doc.append_child(root, form).unwrap();
    doc.append_child(form, div).unwrap();
    doc.append_child(div, field).unwrap();
    doc.set_attribute(form, "id", Some(" formID ")).unwrap();
    doc.set_attribute(form, "name", Some("")).unwrap();

    assert_eq!(form_owner(&doc, field), Some(form));
    assert_eq!(form_owner(&doc, form), None);
    assert_eq!(form_keys(&doc, form), keys(Some("formID"), None));

    assert!(!is_submitted(&doc, field));
    add_class(&mut doc, form, "submitted").unwrap();
    assert!(is_submitted(&doc, field));
}

#[test]
fn update_keys_moves_an_indexed_form_and_ignores_others() {
    let mut doc = Document::new();
    let form = doc.create_element("form");
    let other = doc.create_element("form");
    let field = doc.create_element("mn-number");
    let mut index = FormIndex::new();
    index.register(form, keys(Some("formID"), Some("formName")), "price", field);

    assert!(index.update_keys(form, keys(Some("renamedID"), None)));
    assert_eq!(index.lookup_by_id("renamedID", "price"), Some(field));
    assert_eq!(index.lookup_by_id("formID", "price"), None);
    assert_eq!(index.form_by_name("formName"), None);

    assert!(!index.update_keys(other, keys(Some("otherID"), None)));
    assert_eq!(index.form_by_id("otherID"), None);
    assert_eq!(index.form_count(), 1);
}
