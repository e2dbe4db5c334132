//! Statement copying.

use arbor_ir::{BlockStmt, Seq, Stmt, StmtKind, P};

use super::Copier;
use crate::stack::ensure_sufficient_stack;

impl Copier<'_> {
    pub fn copy_stmt(&mut self, stmt: &P<Stmt>) -> P<Stmt> {
        ensure_sufficient_stack(self.config.stack, || self.copy_stmt_inner(stmt))
    }

    fn copy_stmt_inner(&mut self, stmt: &P<Stmt>) -> P<Stmt> {
        let kind = match &stmt.kind {
            StmtKind::Ext(ext) => return self.passthrough(stmt, ext.kind, stmt.span),

            StmtKind::Bad => StmtKind::Bad,

            StmtKind::Decl(decl) => StmtKind::Decl(self.copy_decl(decl)),

            StmtKind::Empty { implicit } => StmtKind::Empty {
                implicit: *implicit,
            },

            StmtKind::Labeled { label, stmt } => StmtKind::Labeled {
                label: self.copy_ident(label),
                stmt: self.copy_stmt(stmt),
            },

            StmtKind::Expr(expr) => StmtKind::Expr(self.copy_expr(expr)),

            StmtKind::Send { chan, value } => StmtKind::Send {
                chan: self.copy_expr(chan),
                value: self.copy_expr(value),
            },

            StmtKind::IncDec { x, tok } => StmtKind::IncDec {
                x: self.copy_expr(x),
                tok: *tok,
            },

            StmtKind::Assign { lhs, tok, rhs } => StmtKind::Assign {
                lhs: self.copy_exprs(lhs),
                tok: *tok,
                rhs: self.copy_exprs(rhs),
            },

            StmtKind::Go { call } => StmtKind::Go {
                call: self.copy_expr(call),
            },

            StmtKind::Defer { call } => StmtKind::Defer {
                call: self.copy_expr(call),
            },

            StmtKind::Return { results } => StmtKind::Return {
                results: self.copy_exprs(results),
            },

            StmtKind::Branch { tok, label } => StmtKind::Branch {
                tok: *tok,
                label: self.copy_opt_ident(label.as_ref()),
            },

            StmtKind::Block(block) => StmtKind::Block(self.copy_block_value(block)),

            StmtKind::If {
                init,
                cond,
                body,
                else_branch,
            } => StmtKind::If {
                init: self.copy_opt_stmt(init.as_ref()),
                cond: self.copy_expr(cond),
                body: self.copy_block(body),
                else_branch: self.copy_opt_stmt(else_branch.as_ref()),
            },

            StmtKind::CaseClause { list, body } => StmtKind::CaseClause {
                list: self.copy_exprs(list),
                body: self.copy_stmts(body),
            },

            StmtKind::Switch { init, tag, body } => StmtKind::Switch {
                init: self.copy_opt_stmt(init.as_ref()),
                tag: self.copy_opt_expr(tag.as_ref()),
                body: self.copy_block(body),
            },

            StmtKind::TypeSwitch { init, assign, body } => StmtKind::TypeSwitch {
                init: self.copy_opt_stmt(init.as_ref()),
                assign: self.copy_stmt(assign),
                body: self.copy_block(body),
            },

            StmtKind::CommClause { comm, body } => StmtKind::CommClause {
                comm: self.copy_opt_stmt(comm.as_ref()),
                body: self.copy_stmts(body),
            },

            StmtKind::Select { body } => StmtKind::Select {
                body: self.copy_block(body),
            },

            StmtKind::For {
                init,
                cond,
                post,
                body,
            } => StmtKind::For {
                init: self.copy_opt_stmt(init.as_ref()),
                cond: self.copy_opt_expr(cond.as_ref()),
                post: self.copy_opt_stmt(post.as_ref()),
                body: self.copy_block(body),
            },

            StmtKind::Range {
                key,
                value,
                tok,
                x,
                body,
            } => StmtKind::Range {
                key: self.copy_opt_expr(key.as_ref()),
                value: self.copy_opt_expr(value.as_ref()),
                tok: *tok,
                x: self.copy_expr(x),
                body: self.copy_block(body),
            },
        };
        self.alloc(Stmt::new(kind, stmt.span))
    }

    fn copy_opt_stmt(&mut self, stmt: Option<&P<Stmt>>) -> Option<P<Stmt>> {
        stmt.map(|stmt| self.copy_stmt(stmt))
    }

    fn copy_stmts(&mut self, stmts: &Seq<Stmt>) -> Seq<Stmt> {
        self.copy_seq(stmts, Self::copy_stmt)
    }

    /// Copy a braced block. `{}` stays empty and an absent list stays absent.
    pub fn copy_block(&mut self, block: &P<BlockStmt>) -> P<BlockStmt> {
        let copied = self.copy_block_value(block);
        self.alloc(copied)
    }

    fn copy_block_value(&mut self, block: &BlockStmt) -> BlockStmt {
        BlockStmt {
            list: self.copy_stmts(&block.list),
            span: block.span,
        }
    }
}
