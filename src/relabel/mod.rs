
use crate::translate::{Instruction, Label, Program};
use std::collections::HashMap;

#[derive(Default)]
struct LabelMap {
    names: HashMap<Label, Label>,
}

impl LabelMap {
    fn collect(program: &Program) -> Self {
        let mut map = Self::default();
        let labels = program.instructions.iter().flat_map(Instruction::labels);
        for label in labels {
            let next = Label::Normalized(map.names.len() as u64 + 1);
            map.names.entry(label).or_insert(next);
        }
        map
    }

    fn rename(&self, label: Label) -> Label {
        self.names.get(&label).copied().unwrap_or(label)
    }

    fn rename_instruction(&self, instruction: Instruction) -> Instruction {
        match instruction {
            Instruction::Jump(label) => Instruction::Jump(self.rename(label)),
            Instruction::JumpIfFalse(label) => Instruction::JumpIfFalse(self.rename(label)),
            Instruction::Label(label) => Instruction::Label(self.rename(label)),
            Instruction::Labeled(label, inner) => {
                let inner = self.rename_instruction(*inner);
                Instruction::Labeled(self.rename(label), Box::new(inner))
            }
            other => other,
        }
    }
}

/// Renames every label to `L1`, `L2`, ... in order of first appearance.
///
/// All occurrences of one label get the same new name. Running it on an
/// already renamed program changes nothing.
pub fn relabel(program: Program) -> Program {
    let map = LabelMap::collect(&program);
    let instructions = program
        .instructions
        .into_iter()
        .map(|instruction| map.rename_instruction(instruction))
        .collect();

    Program { instructions }
}

impl Program {
    #[must_use]
    pub fn relabel(self) -> Self {
        relabel(self)
    }
}
