mod common;
use common::*;
use sevcsik::lang::{parse, ErrorCode, ErrorKind};
use sevcsik::mach::{Event, Memory, State};

#[test]
fn test_jump_out_of_memory() {
    let mut cpu = machine_sized("org 0\ngoto 9\nend", 4, 1);
    assert_eq!(
        exec(&mut cpu),
        "0: \tGoto @9\nMemory error: Address is out of bounds: 9\n"
    );
    assert_eq!(cpu.state(), State::Halted);
}

#[test]
fn test_put_out_of_memory() {
    let mut cpu = machine_sized("org 0\nload 2 0\nput 0 100\nload 3 0\nend", 4, 1);
    cpu.set_trace(false);
    assert_eq!(exec(&mut cpu), "Memory error: Address is out of bounds: 100\n");
    assert_eq!(cpu.register(0), Some(2.0));
}

#[test]
fn test_get_empty_slot() {
    let mut cpu = machine("org 0\nload 8 1\nget 20 1\nend");
    cpu.set_trace(false);
    assert_eq!(exec(&mut cpu), "Instruction 1: Can't access address (@20)\n");
    assert_eq!(cpu.register(1), Some(8.0));
}

#[test]
fn test_register_out_of_bounds() {
    let mut cpu = machine_sized("org 0\nload 1 50\nend", 4, 8);
    cpu.set_trace(false);
    assert_eq!(exec(&mut cpu), "Instruction 0: Register is out of bounds (*50)\n");
}

#[test]
fn test_invalid_entry() {
    let mut cpu = machine_sized("org 0\nload 1 0\nend", 4, 1);
    cpu.run(4);
    match cpu.execute(10) {
        Event::Error(e) => {
            assert_eq!(e.kind(), ErrorKind::Addressing);
            assert_eq!(e.address(), Some(4));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(cpu.execute(10), Event::Stopped);
}

#[test]
fn test_program_larger_than_memory() {
    let program = parse("org 1\ndata 1\ndata 2\ndata 3\nend").unwrap();
    let mut memory = Memory::new(3);
    let e = program.load(&mut memory).unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfSpace);
    assert_eq!(e.to_string(), "Memory error: Out of space: 3");
}

#[test]
fn test_origin_outside_memory() {
    let program = parse("org 1024\ndata 1\nend").unwrap();
    let mut memory = Memory::new(1024);
    let e = program.load(&mut memory).unwrap_err();
    assert_eq!(e.code(), ErrorCode::AddressOutOfBounds);
}
