use crate::Map;
use crate::Value;
use crate::ast::AST;
use crate::errors::Error as RuntimeError;
use crate::errors::error_builder::{ErrorBuilder, FunctionErrorBuilder, InvalidTypeErrorBuilder};
use crate::errors::invalid_type::InvalidTypeErrorBuilderFactory;
use crate::functions::{DataType, Function, ParamTypes, ReturnValue};
use crate::node_type::{Comparison, NodeType};
use crate::runtime::{ByFunctionHolder, FunctionContext, FunctionRegistrar, Runtime};

/// The recursive tree interpreter.
///
/// Every node kind evaluates through one `visit_*` function. Nodes
/// that broadcast over a [`Value::Projection`] carry a dedicated
/// projection arm; the remaining nodes either treat a projection as
/// the sequence it denotes or recurse into it naturally.
pub struct Interpreter<'a> {
    root: &'a Value,
    runtime: &'a Runtime,
}
impl<'a> Interpreter<'a> {
    pub fn new(runtime: &'a Runtime, root: &'a Value) -> Self {
        Interpreter { root, runtime }
    }
    pub fn evaluate(&self, ast: &AST) -> ReturnValue {
        self.visit(ast, self.root)
    }

    fn visit(&self, ast: &AST, value: &Value) -> ReturnValue {
        match &ast.node_type {
            NodeType::Comparator(op, nodes) => self.visit_comparator(*op, nodes, value),
            NodeType::CurrentNode => Ok(value.clone()),
            NodeType::Field(name) => self.visit_field(name, value),
            NodeType::FilterExpression(nodes) => self.visit_filter(&nodes[0], value),
            NodeType::FunctionExpression { name, args, .. } => {
                self.visit_function(name, args, value)
            }
            NodeType::Index(index) => self.visit_index(*index, value),
            NodeType::KeyValPair(_, nodes) => self.visit(&nodes[0], value),
            NodeType::ListElements => self.visit_flatten(value),
            NodeType::Literal(literal) => self.visit_literal(literal, value),
            NodeType::MultiFieldDict(pairs) => self.visit_multi_field_dict(pairs, value),
            NodeType::MultiFieldList(nodes) => self.visit_multi_field_list(nodes, value),
            NodeType::OrExpression(nodes) => self.visit_or_expression(nodes, value),
            NodeType::SubExpression(nodes) => self.visit_sub_expression(nodes, value),
            NodeType::WildcardIndex => self.visit_wildcard_index(value),
            NodeType::WildcardValues => self.visit_wildcard_values(value),
        }
    }

    fn visit_field(&self, name: &str, value: &Value) -> ReturnValue {
        Ok(match value {
            Value::Object(map) => match map.get(name) {
                Some(found) => found.clone(),
                None => Value::Null,
            },
            Value::Projection(elements) => {
                let mut results = Vec::new();
                for element in elements {
                    match self.visit_field(name, element)? {
                        Value::Null => {}
                        // an array member broadcasts further operations
                        Value::Array(items) => results.push(Value::Projection(items)),
                        found => results.push(found),
                    }
                }
                Value::Projection(results)
            }
            _ => Value::Null,
        })
    }

    fn visit_index(&self, index: i32, value: &Value) -> ReturnValue {
        fn index_array(items: &[Value], index: i32) -> Value {
            let index = if index < 0 {
                index + items.len() as i32
            } else {
                index
            };
            match TryInto::<usize>::try_into(index) {
                Ok(i) if i < items.len() => items[i].clone(),
                _ => Value::Null,
            }
        }
        Ok(match value {
            Value::Array(items) => index_array(items, index),
            Value::Projection(elements) => {
                let mut results = Vec::new();
                for element in elements {
                    if let Some(items) = element.as_array() {
                        match index_array(items, index) {
                            Value::Null => {}
                            found => results.push(found),
                        }
                    }
                }
                Value::Projection(results)
            }
            _ => Value::Null,
        })
    }

    fn visit_literal(&self, literal: &Value, value: &Value) -> ReturnValue {
        Ok(match value {
            Value::Projection(elements) => {
                // one copy of the literal per element, preserving nesting
                let mut results = Vec::new();
                for element in elements {
                    match element {
                        Value::Projection(_) => results.push(self.visit_literal(literal, element)?),
                        _ => results.push(literal.clone()),
                    }
                }
                Value::Projection(results)
            }
            _ => literal.clone(),
        })
    }

    fn visit_sub_expression(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let left = self.visit(&nodes[0], value)?;
        self.visit(&nodes[1], &left)
    }

    fn visit_wildcard_index(&self, value: &Value) -> ReturnValue {
        Ok(match value {
            Value::Array(items) | Value::Projection(items) => Value::Projection(items.clone()),
            _ => Value::Null,
        })
    }

    fn visit_wildcard_values(&self, value: &Value) -> ReturnValue {
        Ok(match value {
            Value::Object(map) => Value::Projection(map.values().cloned().collect()),
            Value::Projection(elements) => {
                let mut results = Vec::new();
                for element in elements {
                    match self.visit_wildcard_values(element)? {
                        Value::Null => {}
                        nested => results.push(nested),
                    }
                }
                Value::Projection(results)
            }
            _ => Value::Null,
        })
    }

    fn visit_flatten(&self, value: &Value) -> ReturnValue {
        Ok(match value {
            Value::Array(items) | Value::Projection(items) => {
                let mut merged = Vec::new();
                for item in items {
                    match item {
                        Value::Array(nested) | Value::Projection(nested) => {
                            merged.extend(nested.iter().cloned())
                        }
                        other => merged.push(other.clone()),
                    }
                }
                Value::Projection(merged)
            }
            _ => Value::Null,
        })
    }

    fn visit_multi_field_dict(&self, pairs: &Vec<AST>, value: &Value) -> ReturnValue {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Projection(elements) => {
                // one object per element, preserving nesting
                let mut results = Vec::new();
                for element in elements {
                    match element {
                        Value::Projection(_) => {
                            results.push(self.visit_multi_field_dict(pairs, element)?)
                        }
                        _ => results.push(self.collect_multi_field_dict(pairs, element)?),
                    }
                }
                Ok(Value::Projection(results))
            }
            _ => self.collect_multi_field_dict(pairs, value),
        }
    }
    fn collect_multi_field_dict(&self, pairs: &Vec<AST>, value: &Value) -> ReturnValue {
        let mut object: Map<String, Value> = Map::new();
        for pair in pairs {
            match &pair.node_type {
                NodeType::KeyValPair(key, nodes) => {
                    let evaluated = self.visit(&nodes[0], value)?;
                    object.insert(key.clone(), evaluated);
                }
                _ => unreachable!(),
            }
        }
        Ok(Value::Object(object))
    }

    fn visit_multi_field_list(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Projection(elements) => {
                // one array per element, preserving nesting
                let mut results = Vec::new();
                for element in elements {
                    match element {
                        Value::Projection(_) => {
                            results.push(self.visit_multi_field_list(nodes, element)?)
                        }
                        _ => results.push(self.collect_multi_field_list(nodes, element)?),
                    }
                }
                Ok(Value::Projection(results))
            }
            _ => self.collect_multi_field_list(nodes, value),
        }
    }
    fn collect_multi_field_list(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let mut array = Vec::new();
        for node in nodes {
            array.push(self.visit(node, value)?);
        }
        Ok(Value::Array(array))
    }

    fn visit_or_expression(&self, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let matched = self.visit(&nodes[0], value)?;
        if matched.is_null() {
            return self.visit(&nodes[1], value);
        }
        Ok(matched)
    }

    fn visit_comparator(&self, op: Comparison, nodes: &Vec<AST>, value: &Value) -> ReturnValue {
        let left = self.visit(&nodes[0], value)?;
        let right = self.visit(&nodes[1], value)?;

        // Equality is structural; Boolean and Number are distinct
        // variants, so a boolean never equals 0 or 1. The ordering
        // comparators are defined on numbers only and otherwise yield
        // null, which a surrounding filter treats as "does not match".
        let compared = match op {
            Comparison::Equal => Value::Boolean(left == right),
            Comparison::NotEqual => Value::Boolean(left != right),
            _ => match (left.as_f64(), right.as_f64()) {
                (Some(lhs), Some(rhs)) => Value::Boolean(match op {
                    Comparison::LessThan => lhs < rhs,
                    Comparison::LessThanOrEqual => lhs <= rhs,
                    Comparison::GreaterThan => lhs > rhs,
                    Comparison::GreaterThanOrEqual => lhs >= rhs,
                    _ => unreachable!(),
                }),
                _ => Value::Null,
            },
        };
        Ok(compared)
    }

    fn visit_filter(&self, predicate: &AST, value: &Value) -> ReturnValue {
        match value {
            Value::Array(items) => {
                let mut result = Vec::new();
                for item in items {
                    if self.visit(predicate, item)?.is_truthy() {
                        result.push(item.clone());
                    }
                }
                Ok(Value::Projection(result))
            }
            Value::Projection(elements) => {
                // each sub-sequence filters independently
                let mut results = Vec::new();
                for element in elements {
                    match element {
                        Value::Projection(_) => results.push(self.visit_filter(predicate, element)?),
                        _ => {
                            if self.visit(predicate, element)?.is_truthy() {
                                results.push(element.clone());
                            }
                        }
                    }
                }
                Ok(Value::Projection(results))
            }
            _ => Ok(Value::Null),
        }
    }

    fn visit_function(&self, name: &str, args: &Vec<AST>, value: &Value) -> ReturnValue {
        if let Value::Projection(elements) = value {
            // the call is re-dispatched once per element
            let mut results = Vec::new();
            for element in elements {
                match self.visit_function(name, args, element)? {
                    Value::Null => {}
                    result => results.push(result),
                }
            }
            return Ok(Value::Projection(results));
        }
        let Some(function) = self.runtime.get(name) else {
            return Err(RuntimeError::unknown_function(name));
        };
        let signature = function.get_signature();
        let mut arguments = Vec::new();
        for (i, arg) in args.iter().enumerate() {
            let index = std::cmp::min(i, signature.len().saturating_sub(1));
            let resolve = signature
                .get(index)
                .map_or(true, |param| !param.expects_expression());
            if resolve {
                arguments.push(self.visit(arg, value)?);
            } else {
                arguments.push(Value::Expression(Box::new(arg.clone())));
            }
        }
        self.runtime.call(name, &arguments, self)
    }
}

impl<'a> FunctionContext for Interpreter<'a> {
    fn create_by_function<'b>(
        &'b self,
        ast: &'b AST,
        params: &'b Vec<ParamTypes>,
        function: &'b dyn Function,
        param_index: usize,
    ) -> Result<ByFunctionHolder<'b>, RuntimeError> {
        let closure = move |value: &Value| -> ReturnValue {
            let result = self.visit(ast, value)?;
            let data_types: Vec<DataType> = params
                .iter()
                .flat_map(|x| match x {
                    ParamTypes::Of(t) => vec![*t],
                    ParamTypes::Any(v) => v.clone(),
                })
                .collect();
            if Runtime::matches_data_type(&result, &data_types) {
                Ok(result)
            } else {
                let err = RuntimeError::get_invalid_type_error_builder()
                    .for_function(function.get_name())
                    .for_expression_parameter(&function.get_parameter_name(param_index))
                    .expected_data_types(&data_types)
                    .received(&result)
                    .build();
                Err(err)
            }
        };
        Ok(ByFunctionHolder {
            closure: Box::new(closure),
        })
    }
}
