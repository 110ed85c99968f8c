use dom::NodeId;
use dom::dom_utils::{collect_named, has_class};
use widgets::{Key, Page, TextField, UiEvent};

fn mounted_input(page: &mut Page) -> (NodeId, NodeId) {
    let form = page.create_element("form").unwrap();
    page.set_attribute(form, "id", "signup").unwrap();
    page.set_attribute(form, "name", "signupForm").unwrap();
    let host = page.create_element("mn-input").unwrap();
    page.append_child(form, host).unwrap();
    let body = page.body();
    page.append_child(body, form).unwrap();
    (form, host)
}

fn field(page: &Page, host: NodeId) -> &TextField {
    page.element::<TextField>(host).unwrap()
}

#[test]
fn has_class_and_a_single_input() {
    let mut page = Page::new();
    let (_, host) = mounted_input(&mut page);
    assert!(has_class(page.document(), host, "mn-input"));
    assert_eq!(collect_named(page.document(), host, "input").len(), 1);
}

#[test]
fn value_attribute_and_typing() {
    let mut page = Page::new();
    let (_, host) = mounted_input(&mut page);
    page.set_attribute(host, "value", "ana").unwrap();
    assert_eq!(field(&page, host).value(), "ana");

    let input = field(&page, host).input().unwrap();
    page.dispatch(input, UiEvent::key_down(Key::End)).unwrap();
    page.dispatch(input, UiEvent::key_down(Key::Char('!'))).unwrap();
    assert_eq!(field(&page, host).value(), "ana!");
    assert_eq!(page.document().attribute(input, "value"), Some("ana!"));

    page.remove_attribute(host, "value").unwrap();
    assert_eq!(field(&page, host).value(), "");
    assert!(!page.document().has_attribute(input, "value"));
}

#[test]
fn placeholder_goes_to_label() {
    let mut page = Page::new();
    let (_, host) = mounted_input(&mut page);
    page.set_attribute(host, "placeholder", "E-mail").unwrap();
    let label = field(&page, host).label().unwrap();
    assert_eq!(page.document().text_content(label), "E-mail");
    page.remove_attribute(host, "placeholder").unwrap();
    assert_eq!(page.document().text_content(label), "");
}

#[test]
fn required_validation_and_guarded_keyup() {
    let mut page = Page::new();
    let (form, host) = mounted_input(&mut page);
    page.set_attribute(host, "required", "").unwrap();
    let input = field(&page, host).input().unwrap();

    page.dispatch(input, UiEvent::key_up(Key::Tab)).unwrap();
    assert!(!has_class(page.document(), host, "invalid"));

    page.add_class(form, "submitted").unwrap();
    page.dispatch(input, UiEvent::key_up(Key::Tab)).unwrap();
    assert!(has_class(page.document(), host, "invalid"));
    assert!(has_class(page.document(), host, "required"));

    page.dispatch(input, UiEvent::Input("  ".into())).unwrap();
    page.dispatch(input, UiEvent::key_up(Key::Char(' '))).unwrap();
    assert!(has_class(page.document(), host, "required"));

    page.dispatch(input, UiEvent::Input("bob".into())).unwrap();
    page.dispatch(input, UiEvent::key_up(Key::Char('b'))).unwrap();
    assert!(!has_class(page.document(), host, "invalid"));
}

#[test]
fn name_registration_and_rename() {
    let mut page = Page::new();
    let (_, host) = mounted_input(&mut page);
    page.set_attribute(host, "name", "email").unwrap();
    assert_eq!(page.forms().lookup_by_id("signup", "email"), Some(host));
    page.set_attribute(host, "name", "mail").unwrap();
    assert_eq!(page.forms().lookup_by_name("signupForm", "mail"), Some(host));
    assert_eq!(page.forms().lookup_by_name("signupForm", "email"), None);
}

#[test]
fn mirrored_flags_block_editing() {
    let mut page = Page::new();
    let (_, host) = mounted_input(&mut page);
    let input = field(&page, host).input().unwrap();
    page.set_attribute(host, "readonly", "").unwrap();
    page.set_attribute(host, "autofocus", "").unwrap();
    assert!(page.document().has_attribute(input, "readonly"));
    assert!(page.document().has_attribute(input, "autofocus"));

    assert!(!page.dispatch(input, UiEvent::key_down(Key::Char('x'))).unwrap());
    assert!(!page.dispatch(input, UiEvent::Input("x".into())).unwrap());
    assert_eq!(field(&page, host).value(), "");

    page.with_element::<TextField, _>(host, |f, cx| f.set_disabled(cx, true))
        .unwrap()
        .unwrap();
    assert!(page.document().has_attribute(input, "disabled"));
    assert!(!page.dispatch(input, UiEvent::key_down(Key::Home)).unwrap());
}
