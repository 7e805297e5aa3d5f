//! Every node is owned by the tree: dropping the root, or failing a parse,
//! gives back every allocation the parse made.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use volt_parser::parse;

/// Counts live allocations made by the current thread.
struct CountingAllocator;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

fn live() -> isize {
    LIVE.with(Cell::get)
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        adjust(1);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        adjust(-1);
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

const PAGE: &str = "{% extends 'layout.volt' %}\n\
    {% block body %}\n\
    {% for k, v in items if v.visible %}{{ k ~ ': ' ~ v.name | upper }}{% else %}none{% endfor %}\n\
    {% macro card(title, size = 2) %}{{ [title, 'size': size * 2][0:1] }}{% endmacro %}\n\
    {% set x = a ? -b : not c %}{% include 'p.volt' with ['n': f(1, 'k': 2.5)] %}\n\
    {% endblock %}";

const BROKEN: &str = "{% for i in items %}{% if i %}{{ [1, 2, (3 + ";

#[test]
fn test_dropping_tree_frees_every_node() {
    // Settle one-time allocations (logging callsites and the like).
    drop(parse(PAGE, "page.volt"));
    drop(parse(BROKEN, "broken.volt"));

    let before = live();
    let template = parse(PAGE, "page.volt").unwrap();
    assert!(live() > before);
    assert!(template.node_count() > 20);
    drop(template);
    assert_eq!(live(), before);
}

#[test]
fn test_failed_parse_frees_partial_tree() {
    drop(parse(BROKEN, "broken.volt"));

    let before = live();
    let err = parse(BROKEN, "broken.volt").unwrap_err();
    drop(err);
    assert_eq!(live(), before);
}

#[test]
fn test_overflow_frees_stack() {
    let source = format!("{{{{ {}1", "(".repeat(300));
    drop(parse(&source, "deep.volt"));

    let before = live();
    drop(parse(&source, "deep.volt"));
    assert_eq!(live(), before);
}
