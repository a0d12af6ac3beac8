use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use cyberdev_portfolio::{
    contact::{
        ContactDraft, ContactForm, Field, MessageRelay, Notice, SimulatedRelay, SubmitState,
        SUBMIT_DELAY,
    },
    content::{Category, PROJECTS},
    error::ContactError,
    gallery::{Filter, ProjectFilter},
    reveal::RevealTrigger,
    schedule::{ManualClock, TaskHandle},
    typewriter::{
        play_terminal, play_typewriter, TerminalScript, Typewriter, CONTACT_SCRIPT, HERO_TICK,
        HERO_TITLE, TERMINAL_TICK,
    },
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Grace Hopper".into());
    form.set_field(Field::Email, "grace@example.com".into());
    form.set_field(Field::Company, "Navy".into());
    form.set_field(Field::Subject, "Pipelines".into());
    form.set_field(Field::Message, "We need a faster release train.".into());
    form
}

/// Submits `form` through a relay on `clock` and records every notice it produces.
fn submit_through(
    clock: &ManualClock,
    form: &Rc<RefCell<ContactForm>>,
) -> (Result<(), ContactError>, Rc<RefCell<Vec<Notice>>>) {
    let notices = Rc::new(RefCell::new(Vec::new()));
    let message = match form.borrow_mut().submit() {
        Ok(message) => message,
        Err(err) => return (Err(err), notices),
    };
    let relay = SimulatedRelay::new(clock.clone());
    let _task = relay.deliver(message, {
        let form = Rc::clone(form);
        let notices = Rc::clone(&notices);
        Box::new(move |outcome| {
            if let Some(notice) = form.borrow_mut().settle(outcome) {
                notices.borrow_mut().push(notice);
            }
        })
    });
    (Ok(()), notices)
}

#[test]
fn reveal_fires_once_per_section() {
    let mut trigger = RevealTrigger::new();
    let fired = [false, true, false, true, true]
        .into_iter()
        .filter(|visible| trigger.observe(*visible))
        .count();
    assert_eq!(fired, 1);
    assert!(trigger.is_triggered());
}

#[test]
fn every_filter_yields_an_ordered_subsequence() {
    let mut gallery = ProjectFilter::new();
    for filter in Filter::choices() {
        gallery.set_filter(filter);
        let shown = gallery.visible(PROJECTS).map(|p| p.id).collect::<Vec<_>>();
        let expected = PROJECTS
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(shown, expected, "filter {}", filter.id());
    }
}

#[test]
fn all_filter_is_the_identity() {
    let gallery = ProjectFilter::new();
    assert_eq!(gallery.current(), Filter::All);
    assert_eq!(gallery.visible(PROJECTS).count(), PROJECTS.len());
}

#[test]
fn category_filter_only_shows_its_category() {
    let mut gallery = ProjectFilter::new();
    gallery.set_filter(Filter::Only(Category::Security));
    assert!(gallery
        .visible(PROJECTS)
        .all(|p| p.category == Category::Security));
}

#[test]
fn hero_title_types_out_prefixes_and_restarts() {
    let clock = ManualClock::new();
    let frames = Rc::new(RefCell::new(Vec::<String>::new()));
    let _task = play_typewriter(&clock, Typewriter::hero(), {
        let frames = Rc::clone(&frames);
        move |frame: &str| frames.borrow_mut().push(frame.to_string())
    });

    let cycle = HERO_TITLE.chars().count() + 1;
    clock.advance(HERO_TICK * (cycle as u32 + 2));

    let frames = frames.borrow();
    assert_eq!(frames.len(), cycle + 2);
    assert!(frames.iter().all(|f| HERO_TITLE.starts_with(f.as_str())));
    assert_eq!(frames[cycle - 1], HERO_TITLE);
    assert_eq!(frames[cycle], "");
    assert_eq!(frames[cycle + 1], "A");
}

#[test]
fn terminal_prints_the_whole_script_then_stops() {
    let clock = ManualClock::new();
    let last = Rc::new(RefCell::new(String::new()));
    let _task = play_terminal(&clock, TerminalScript::contact(), {
        let last = Rc::clone(&last);
        move |frame: &str| *last.borrow_mut() = frame.to_string()
    });

    let expected = CONTACT_SCRIPT.join("\n");
    let ticks = expected.chars().count() as u32 + 1;
    clock.advance(TERMINAL_TICK * ticks);

    assert_eq!(*last.borrow(), expected);
    assert_eq!(clock.pending(), 0);

    clock.advance(TERMINAL_TICK * 10);
    assert_eq!(*last.borrow(), expected);
}

#[test]
fn submit_settles_exactly_once_after_the_delay() {
    let clock = ManualClock::new();
    let form = Rc::new(RefCell::new(filled_form()));

    let (started, notices) = submit_through(&clock, &form);
    assert_eq!(started, Ok(()));
    assert!(form.borrow().is_busy());

    clock.advance(SUBMIT_DELAY - ms(1));
    assert!(form.borrow().is_busy());
    assert!(notices.borrow().is_empty());

    clock.advance(ms(1));
    let form = form.borrow();
    assert_eq!(form.state(), &SubmitState::Idle);
    assert_eq!(form.draft(), &ContactDraft::default());
    assert_eq!(*notices.borrow(), [Notice::Delivered]);

    clock.advance(SUBMIT_DELAY * 2);
    assert_eq!(notices.borrow().len(), 1);
}

#[test]
fn second_submit_while_in_flight_schedules_nothing() {
    let clock = ManualClock::new();
    let form = Rc::new(RefCell::new(filled_form()));

    let (first, _) = submit_through(&clock, &form);
    assert_eq!(first, Ok(()));
    let (second, _) = submit_through(&clock, &form);
    assert_eq!(second, Err(ContactError::InFlight));
    assert_eq!(clock.pending(), 1);
}

#[test]
fn missing_required_field_never_starts_a_timer() {
    let clock = ManualClock::new();
    let mut draft = filled_form();
    draft.set_field(Field::Email, String::new());
    let form = Rc::new(RefCell::new(draft));

    let (started, _) = submit_through(&clock, &form);
    assert_eq!(started, Err(ContactError::MissingField(Field::Email)));
    assert_eq!(clock.pending(), 0);
    assert!(!form.borrow().is_busy());
    assert_eq!(form.borrow().value(Field::Name), "Grace Hopper");
}

#[test]
fn cancelled_animation_stops_mutating() {
    let clock = ManualClock::new();
    let writes = Rc::new(Cell::new(0));
    let task = play_terminal(&clock, TerminalScript::contact(), {
        let writes = Rc::clone(&writes);
        move |_: &str| writes.set(writes.get() + 1)
    });

    clock.advance(TERMINAL_TICK * 5);
    assert_eq!(writes.get(), 5);

    task.cancel();
    clock.advance(TERMINAL_TICK * 100);
    assert_eq!(writes.get(), 5);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn cancelled_hero_title_stops_typing() {
    let clock = ManualClock::new();
    let frames = Rc::new(RefCell::new(Vec::<String>::new()));
    let task = play_typewriter(&clock, Typewriter::hero(), {
        let frames = Rc::clone(&frames);
        move |frame: &str| frames.borrow_mut().push(frame.to_string())
    });

    clock.advance(HERO_TICK * 4);
    task.cancel();
    clock.advance(HERO_TICK * 40);

    assert_eq!(*frames.borrow(), ["", "A", "AW", "AWS"]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn cancelled_delivery_never_settles() {
    let clock = ManualClock::new();
    let form = Rc::new(RefCell::new(filled_form()));
    let settled = Rc::new(Cell::new(false));

    let message = form.borrow_mut().submit().unwrap();
    let task = SimulatedRelay::new(clock.clone()).deliver(message, {
        let form = Rc::clone(&form);
        let settled = Rc::clone(&settled);
        Box::new(move |outcome| {
            settled.set(true);
            form.borrow_mut().settle(outcome);
        })
    });

    clock.advance(SUBMIT_DELAY / 2);
    task.cancel();
    clock.advance(SUBMIT_DELAY * 2);

    assert!(!settled.get());
    assert_eq!(clock.pending(), 0);
    let form = form.borrow();
    assert!(form.is_busy());
    assert_eq!(form.value(Field::Subject), "Pipelines");
}
