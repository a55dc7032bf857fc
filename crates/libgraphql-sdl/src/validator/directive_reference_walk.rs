use crate::validator::LookupTables;
use libgraphql_sdl_parser::ast::DirectiveAnnotation;
use libgraphql_sdl_parser::ast::TypeDefinition;
use std::collections::HashSet;

/// Depth-first search for uses of one directive (the target) reachable from
/// a starting point in the type/directive reference graph.
///
/// From a directive annotation the walk continues into that directive's
/// definition: the directives on each of its arguments and each argument's
/// type. From a type it continues into the directives on the type, on its
/// enum values or input fields, and into the types of those input fields.
/// Each type and directive definition is entered at most once.
///
/// Annotations naming an undefined directive are leaves.
///
/// The walk keeps its own stack of entered definitions rather than
/// recursing, so arbitrarily long reference chains cannot exhaust the call
/// stack.
pub struct DirectiveReferenceWalk<'a> {
    lookup_tables: &'a LookupTables,
    target: &'a str,
    stack: Vec<Frame<'a>>,
    visited_directives: HashSet<&'a str>,
    visited_types: HashSet<&'a str>,
}

/// One outgoing edge of a type or directive definition.
#[derive(Clone, Copy, Debug)]
enum Step<'a> {
    Directive(&'a str),
    Type(&'a str),
}

/// A definition currently on the search path, with the edges still to try
/// stored in reverse so the next one can be popped.
struct Frame<'a> {
    label: String,
    pending: Vec<Step<'a>>,
}

impl<'a> DirectiveReferenceWalk<'a> {
    pub fn new(lookup_tables: &'a LookupTables, target: &'a str) -> Self {
        Self {
            lookup_tables,
            target,
            stack: vec![],
            visited_directives: HashSet::new(),
            visited_types: HashSet::new(),
        }
    }

    /// Searches from a type definition. On success returns the chain of
    /// type names and `@directive` names leading to the target.
    pub fn find_in_type(mut self, type_def: &'a TypeDefinition) -> Option<Vec<String>> {
        self.visited_types.insert(type_def.name());
        self.enter_type(type_def);
        self.run()
    }

    /// Searches from a list of directive annotations.
    pub fn find_in_annotations(
        mut self,
        directives: &'a [DirectiveAnnotation],
    ) -> Option<Vec<String>> {
        self.stack.push(Frame {
            label: String::new(),
            pending: directive_steps(directives).rev().collect(),
        });
        self.run().map(|mut path| {
            path.remove(0);
            path
        })
    }

    fn run(mut self) -> Option<Vec<String>> {
        while let Some(frame) = self.stack.last_mut() {
            let Some(step) = frame.pending.pop() else {
                self.stack.pop();
                continue;
            };
            match step {
                Step::Directive(name) if name == self.target => {
                    let mut path: Vec<String> =
                        self.stack.into_iter().map(|frame| frame.label).collect();
                    path.push(format!("@{name}"));
                    return Some(path);
                }
                Step::Directive(name) => self.enter_directive(name),
                Step::Type(name) => {
                    if !self.visited_types.insert(name) {
                        continue;
                    }
                    if let Some(type_def) = self.lookup_tables.type_definition(name) {
                        self.enter_type(type_def);
                    }
                }
            }
        }
        None
    }

    fn enter_directive(&mut self, directive_name: &'a str) {
        if !self.visited_directives.insert(directive_name) {
            return;
        }
        let Some(directive_def) = self.lookup_tables.directive_definition(directive_name) else {
            log::debug!(
                "Directive `@{directive_name}` is not defined; not following it while \
                 checking `@{}` for self-references.",
                self.target,
            );
            return;
        };

        let steps: Vec<Step<'a>> = directive_def
            .arguments
            .iter()
            .flat_map(|argument| {
                directive_steps(&argument.directives)
                    .chain([Step::Type(argument.value_type.innermost_type_name())])
            })
            .collect();
        self.push_frame(format!("@{directive_name}"), steps);
    }

    fn enter_type(&mut self, type_def: &'a TypeDefinition) {
        let mut steps: Vec<Step<'a>> = directive_steps(type_def.directives()).collect();
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                for value in &enum_def.values {
                    steps.extend(directive_steps(&value.directives));
                }
            }
            TypeDefinition::InputObject(input_def) => {
                for field in &input_def.fields {
                    steps.extend(directive_steps(&field.directives));
                    steps.push(Step::Type(field.value_type.innermost_type_name()));
                }
            }
            TypeDefinition::Interface(_)
            | TypeDefinition::Object(_)
            | TypeDefinition::Scalar(_)
            | TypeDefinition::Union(_) => {}
        }
        self.push_frame(type_def.name().to_string(), steps);
    }

    fn push_frame(&mut self, label: String, mut steps: Vec<Step<'a>>) {
        steps.reverse();
        self.stack.push(Frame { label, pending: steps });
    }
}

fn directive_steps<'a>(
    directives: &'a [DirectiveAnnotation],
) -> impl DoubleEndedIterator<Item = Step<'a>> {
    directives
        .iter()
        .map(|annotation| Step::Directive(annotation.name.as_str()))
}
