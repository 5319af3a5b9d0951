use project_tracker_core::{ProjectId, ProjectStatus, ProjectStore, Snapshot};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn recording_store() -> (ProjectStore, Rc<RefCell<Vec<Snapshot>>>) {
    let mut store = ProjectStore::new();
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    store.subscribe(move |snapshot: &Snapshot| sink.borrow_mut().push(snapshot.clone()));
    (store, received)
}

#[test]
fn added_ids_are_pairwise_distinct() {
    let mut store = ProjectStore::new();
    let ids: Vec<ProjectId> = (0..200)
        .map(|index| store.add_project(format!("project {index}"), "some description", 2))
        .collect();

    let unique: HashSet<ProjectId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn new_project_is_active_in_first_snapshot() {
    let (mut store, received) = recording_store();

    let id = store.add_project("A", "desc1", 3);

    let received = received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].len(), 1);
    assert_eq!(received[0][0].id, id);
    assert_eq!(received[0][0].status, ProjectStatus::Active);
}

#[test]
fn moving_to_current_status_does_not_notify() {
    let (mut store, received) = recording_store();
    let id = store.add_project("A", "desc1", 3);
    let before = received.borrow().len();

    store.move_project(&id, ProjectStatus::Active);

    assert_eq!(received.borrow().len(), before);
}

#[test]
fn unknown_id_is_silently_ignored() {
    let (mut store, received) = recording_store();
    store.add_project("A", "desc1", 3);
    let state_before = store.snapshot();
    let calls_before = received.borrow().len();

    store.move_project(&ProjectId::generate(), ProjectStatus::Finished);

    assert_eq!(received.borrow().len(), calls_before);
    assert_eq!(store.snapshot(), state_before);
}

#[test]
fn status_changes_never_reorder() {
    let (mut store, received) = recording_store();
    let a = store.add_project("A", "desc1", 1);
    let b = store.add_project("B", "desc2", 2);
    let c = store.add_project("C", "desc3", 3);

    store.move_project(&b, ProjectStatus::Finished);
    store.move_project(&a, ProjectStatus::Finished);
    store.move_project(&b, ProjectStatus::Active);

    for snapshot in received.borrow().iter() {
        let order: Vec<ProjectId> = snapshot.iter().map(|project| project.id).collect();
        assert_eq!(order, vec![a, b, c][..order.len()].to_vec());
    }
    assert_eq!(received.borrow().len(), 6);
}

#[test]
fn every_subscriber_receives_one_equal_snapshot() {
    let mut store = ProjectStore::new();
    let received: Vec<Rc<RefCell<Vec<Snapshot>>>> =
        (0..4).map(|_| Rc::new(RefCell::new(Vec::new()))).collect();
    for sink in &received {
        let sink = Rc::clone(sink);
        store.subscribe(move |snapshot: &Snapshot| sink.borrow_mut().push(snapshot.clone()));
    }

    store.add_project("A", "desc1", 3);

    let first = received[0].borrow()[0].clone();
    for sink in &received {
        let sink = sink.borrow();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0], first);
        assert_eq!(sink[0].len(), 1);
        assert_eq!(sink[0][0].status, ProjectStatus::Active);
    }
}

#[test]
fn finished_projects_can_move_back_to_active() {
    let (mut store, received) = recording_store();
    let id = store.add_project("A", "desc1", 3);

    store.move_project(&id, ProjectStatus::Finished);
    store.move_project(&id, ProjectStatus::Active);

    let received = received.borrow();
    assert_eq!(received.len(), 3);
    assert_eq!(received[2][0].status, ProjectStatus::Active);
}

#[test]
fn failing_subscriber_does_not_block_later_subscribers() {
    let mut store = ProjectStore::new();
    store.subscribe(|_: &Snapshot| panic!("render failed"));
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_: &Snapshot| *counter.borrow_mut() += 1);

    let id = store.add_project("A", "desc1", 3);
    store.move_project(&id, ProjectStatus::Finished);

    assert_eq!(*calls.borrow(), 2);
    assert_eq!(store.get(&id).unwrap().status, ProjectStatus::Finished);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut store = ProjectStore::new();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let subscription = store.subscribe(move |_: &Snapshot| *counter.borrow_mut() += 1);

    store.add_project("A", "desc1", 3);
    assert!(store.unsubscribe(subscription));
    store.add_project("B", "desc2", 2);

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn end_to_end_add_and_move_scenario() {
    let (mut store, received) = recording_store();

    let a = store.add_project("A", "desc1", 3);
    {
        let received = received.borrow();
        let titles: Vec<&str> = received[0].iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A"]);
        assert_eq!(received[0][0].status, ProjectStatus::Active);
    }

    let b = store.add_project("B", "desc2", 2);
    {
        let received = received.borrow();
        let latest = &received[1];
        assert_eq!(latest.len(), 2);
        assert!(latest.iter().all(|p| p.status == ProjectStatus::Active));
    }

    store.move_project(&a, ProjectStatus::Finished);
    {
        let received = received.borrow();
        let latest = &received[2];
        assert_eq!(latest[0].id, a);
        assert_eq!(latest[0].status, ProjectStatus::Finished);
        assert_eq!(latest[1].id, b);
        assert_eq!(latest[1].status, ProjectStatus::Active);
    }

    store.move_project(&a, ProjectStatus::Finished);
    assert_eq!(received.borrow().len(), 3);
}
