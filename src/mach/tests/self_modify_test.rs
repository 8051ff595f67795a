use super::*;
use crate::mach::Format;

#[test]
fn test_write_then_read_back() {
    let mut cpu = machine(
        5,
        vec![
            (0, Instruction::Load(5.0, 0)),
            (1, Instruction::Put(0, 3)),
            (2, Instruction::Goto(4)),
            (3, Instruction::Data(0.0)),
            (4, Instruction::Get(3, 1)),
        ],
    );
    assert_eq!(
        run(&mut cpu, 0),
        "0: \tLoad 5 to *0\n\
         1: \tPut *0 to @3\n\
         2: \tGoto @4\n\
         4: \tGet @3 to *1\n\
         CPU: no more instructions, terminating\n"
    );
    assert_eq!(cpu.register(1), Some(5.0));
    assert_eq!(cpu.memory().get(3).unwrap(), Some(&Instruction::Data(5.0)));
}

#[test]
fn test_overwrite_next_instruction() {
    // The Put replaces the Print at 2 before it is fetched.
    let mut cpu = machine(
        3,
        vec![
            (0, Instruction::Load(7.0, 0)),
            (1, Instruction::Put(0, 2)),
            (2, Instruction::Print(0, Format::new("never"))),
        ],
    );
    cpu.set_trace(false);
    assert_eq!(run(&mut cpu, 0), "CPU: no more instructions, terminating\n");
    assert_eq!(cpu.memory().get(2).unwrap(), Some(&Instruction::Data(7.0)));
}

#[test]
fn test_overwrite_running_instruction() {
    // A loop body that replaces its own jump ends the loop.
    let mut cpu = machine(
        4,
        vec![
            (0, Instruction::Load(1.0, 0)),
            (1, Instruction::Print(0, Format::new("pass %g"))),
            (2, Instruction::Put(0, 3)),
            (3, Instruction::Goto(1)),
        ],
    );
    cpu.set_trace(false);
    assert_eq!(
        run(&mut cpu, 0),
        "pass 1\nCPU: no more instructions, terminating\n"
    );
}

#[test]
fn test_get_executes_non_data() {
    // Reading a Load through Get runs the Load and yields its literal.
    let mut cpu = machine(
        3,
        vec![
            (0, Instruction::Get(2, 1)),
            (2, Instruction::Load(4.0, 3)),
        ],
    );
    cpu.set_trace(false);
    run(&mut cpu, 0);
    assert_eq!(cpu.register(1), Some(4.0));
    assert_eq!(cpu.register(3), Some(4.0));
}
