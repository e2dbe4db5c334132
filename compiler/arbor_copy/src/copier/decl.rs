//! Declaration, spec, and file copying.

use arbor_ir::{Decl, DeclKind, File, Spec, SpecKind, P};

use super::Copier;

impl Copier<'_> {
    pub fn copy_decl(&mut self, decl: &P<Decl>) -> P<Decl> {
        let kind = match &decl.kind {
            DeclKind::Ext(ext) => return self.passthrough(decl, ext.kind, decl.span),
            DeclKind::Bad => DeclKind::Bad,
            DeclKind::Gen {
                tok,
                grouped,
                specs,
            } => DeclKind::Gen {
                tok: *tok,
                grouped: *grouped,
                specs: self.copy_seq(specs, Self::copy_spec),
            },
            DeclKind::Func {
                recv,
                name,
                ty,
                body,
            } => DeclKind::Func {
                recv: self.copy_opt_fields(recv.as_ref()),
                name: self.copy_ident(name),
                ty: self.copy_func_type(ty),
                body: body.as_ref().map(|body| self.copy_block(body)),
            },
        };
        self.alloc(Decl::new(kind, decl.span))
    }

    pub fn copy_spec(&mut self, spec: &P<Spec>) -> P<Spec> {
        let kind = match &spec.kind {
            SpecKind::Ext(ext) => return self.passthrough(spec, ext.kind, spec.span),
            SpecKind::Import { name, path } => SpecKind::Import {
                name: self.copy_opt_ident(name.as_ref()),
                path: self.copy_lit(path),
            },
            // One type expression serves every name, so it is copied once.
            SpecKind::Value { names, ty, values } => SpecKind::Value {
                names: self.copy_seq(names, Self::copy_ident),
                ty: self.copy_opt_expr(ty.as_ref()),
                values: self.copy_exprs(values),
            },
            SpecKind::Type {
                name,
                type_params,
                alias,
                ty,
            } => SpecKind::Type {
                name: self.copy_ident(name),
                type_params: self.copy_opt_fields(type_params.as_ref()),
                alias: *alias,
                ty: self.copy_expr(ty),
            },
        };
        self.alloc(Spec::new(kind, spec.span))
    }

    pub fn copy_file(&mut self, file: &P<File>) -> P<File> {
        let copied = File {
            package: self.copy_ident(&file.package),
            decls: self.copy_seq(&file.decls, Self::copy_decl),
            unresolved: self.copy_seq(&file.unresolved, Self::copy_ident),
            span: file.span,
        };
        self.alloc(copied)
    }
}
