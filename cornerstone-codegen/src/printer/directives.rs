//! `#include` and `#pragma` lines.

use super::CppPrinter;
use crate::tree::{Include, Pragma};

impl CppPrinter {
    /// Write the include into every stream of its residence, leaving the
    /// selection as it was.
    pub(super) fn write_include(&mut self, include: &Include) {
        let previous = self.selected();
        let target = include.target();
        for &stream in include.residence.streams() {
            self.router.select(stream);
            self.out().write("#include ").write_line(&target);
        }
        self.router.select(previous);
    }

    pub(super) fn write_pragma(&mut self, pragma: &Pragma) {
        self.select_for(pragma.residence);
        let out = self.out();
        out.write("#pragma ").write(&pragma.body);
        if let Some(comment) = &pragma.comment {
            out.write(" // ").write(comment);
        }
        out.new_line();
    }
}
