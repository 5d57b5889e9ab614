use super::*;

#[test]
fn tasks_run_once_in_registration_order() {
    let mut q = DeferredQueue::<Vec<u32>>::new();
    q.register(|v| v.push(1));
    q.register(|v| v.push(2));

    let mut out = Vec::new();
    assert_eq!(q.fire(&mut out), 2);
    assert_eq!(out, vec![1, 2]);

    assert_eq!(q.fire(&mut out), 0);
    assert_eq!(out, vec![1, 2]);
    assert!(q.is_empty());
}

#[test]
fn cancelled_task_never_runs() {
    let mut q = DeferredQueue::<Vec<u32>>::new();
    let a = q.register(|v| v.push(1));
    let b = q.register(|v| v.push(2));
    assert!(q.is_pending(a));
    assert!(q.cancel(a));
    assert!(!q.cancel(a));
    assert!(!q.is_pending(a));
    assert!(q.is_pending(b));

    let mut out = Vec::new();
    q.fire(&mut out);
    assert_eq!(out, vec![2]);
    assert!(!q.cancel(b));
}

#[test]
fn ids_are_unique() {
    let mut q = DeferredQueue::<()>::new();
    let a = q.register(|_| {});
    let b = q.register(|_| {});
    assert_ne!(a, b);
    assert_eq!(q.len(), 2);
}
