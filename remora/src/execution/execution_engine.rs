//! Functionality which handles the execution of a program

use remora_physical::datavalues::AnyDataValue;

use crate::error::Error;
use crate::rule_model::components::tag::Tag;
use crate::rule_model::program::{Program, ProgramAnalysis};
use crate::table_manager::TableManager;

use super::execution_parameters::ExecutionParameters;
use super::rule_execution::RuleExecution;
use super::selection_strategy::strategy::RuleSelectionStrategy;

/// Step in which the input facts are loaded
const STEP_INPUT: usize = 0;

/// Stores useful information about a rule.
#[derive(Default, Debug, Copy, Clone)]
pub struct RuleInfo {
    /// The execution step this rule was last applied in.
    pub step_last_applied: usize,
}

impl RuleInfo {
    /// Create new [RuleInfo].
    pub fn new() -> Self {
        Self {
            step_last_applied: 0,
        }
    }
}

/// Object which handles the evaluation of the program.
///
/// The engine owns all relations of one loaded program;
/// nothing else may mutate them while [ExecutionEngine::execute] runs.
/// Once the fixpoint is reached the relations are frozen
/// and can be inspected any number of times.
#[derive(Debug)]
pub struct ExecutionEngine<RuleSelectionStrategy> {
    program: Program,
    analysis: ProgramAnalysis,

    rule_strategy: RuleSelectionStrategy,

    table_manager: TableManager,

    rule_infos: Vec<RuleInfo>,
    current_step: usize,
    solved: bool,

    parameters: ExecutionParameters,
}

impl<Strategy: RuleSelectionStrategy> ExecutionEngine<Strategy> {
    /// Initialize [ExecutionEngine] with the default [ExecutionParameters].
    pub fn initialize(program: Program) -> Result<Self, Error> {
        Self::initialize_with(program, ExecutionParameters::default())
    }

    /// Initialize [ExecutionEngine].
    ///
    /// This validates the program,
    /// registers all its predicates,
    /// and loads the input facts;
    /// no rule is applied yet.
    ///
    /// # Errors
    /// The program fails its static checks.
    pub fn initialize_with(
        program: Program,
        parameters: ExecutionParameters,
    ) -> Result<Self, Error> {
        let analysis = program.analyze()?;

        let mut table_manager = TableManager::new();
        Self::register_all_predicates(&mut table_manager, &analysis);
        Self::add_all_facts(&mut table_manager, &program)?;

        let mut rule_infos = Vec::<RuleInfo>::new();
        program.rules().iter().for_each(|_| rule_infos.push(RuleInfo::new()));

        let rule_strategy = Strategy::new(program.rules().iter().collect())?;

        Ok(Self {
            program,
            analysis,
            rule_strategy,
            table_manager,
            rule_infos,
            current_step: 1,
            solved: false,
            parameters,
        })
    }

    /// Register all predicates found in the program to the [TableManager].
    fn register_all_predicates(table_manager: &mut TableManager, analysis: &ProgramAnalysis) {
        for (predicate, arity) in &analysis.all_predicates {
            table_manager.register_predicate(predicate.clone(), *arity);
        }
    }

    /// Load the input facts of the program into the [TableManager].
    fn add_all_facts(table_manager: &mut TableManager, program: &Program) -> Result<(), Error> {
        for fact in program.facts() {
            let row = fact
                .datavalues()
                .expect("validation guarantees that facts are ground");

            table_manager.insert(fact.predicate(), STEP_INPUT, row)?;
        }

        Ok(())
    }

    fn step(&mut self, rule_index: usize, execution: &RuleExecution) -> Result<Vec<Tag>, Error> {
        if let Some(limit) = self.parameters.max_steps {
            if self.current_step > limit {
                return Err(Error::StepLimitExceeded { limit });
            }
        }

        log::info!("<<< {0}: APPLYING RULE {rule_index} >>>", self.current_step);

        let current_info = &mut self.rule_infos[rule_index];

        let updated_predicates =
            execution.execute(&mut self.table_manager, current_info, self.current_step)?;

        current_info.step_last_applied = self.current_step;

        self.current_step += 1;
        Ok(updated_predicates)
    }

    /// Executes the program.
    ///
    /// This runs the semi-naive fixpoint loop to completion:
    /// rules are applied in the order given by the selection strategy
    /// until a full pass over every rule inserts zero new tuples.
    /// Calling this a second time is a no-op,
    /// since the fixpoint is already known to be reached.
    pub fn execute(&mut self) -> Result<(), Error> {
        let rule_execution: Vec<RuleExecution> = self
            .program
            .rules()
            .iter()
            .map(RuleExecution::initialize)
            .collect();

        let mut new_derivations: Option<bool> = None;

        while let Some(index) = self.rule_strategy.next_rule(new_derivations) {
            let updated_predicates = self.step(index, &rule_execution[index])?;
            new_derivations = Some(!updated_predicates.is_empty());
        }

        log::info!(
            "reasoning finished after {} rule applications",
            self.current_step - 1
        );

        self.solved = true;
        Ok(())
    }

    /// Get a reference to the loaded program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Return whether the fixpoint has been reached.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Creates an [Iterator] over all facts of a predicate.
    ///
    /// The sequence is lazy and restartable,
    /// and every call after the fixpoint returns the same contents,
    /// since relations are no longer mutated.
    /// A predicate unknown to the engine yields an empty sequence.
    ///
    /// # Errors
    /// The fixpoint has not been computed yet.
    pub fn predicate_rows(
        &self,
        predicate: &Tag,
    ) -> Result<impl Iterator<Item = Vec<AnyDataValue>> + '_, Error> {
        if !self.solved {
            return Err(Error::NotReady);
        }

        Ok(self
            .table_manager
            .all_rows(predicate)
            .map(<[AnyDataValue]>::to_vec))
    }

    /// Returns the arity of the predicate if the predicate is known to the engine,
    /// and `None` otherwise.
    pub fn predicate_arity(&self, predicate: &Tag) -> Option<usize> {
        self.analysis.all_predicates.get(predicate).copied()
    }

    /// Counts the facts of a single predicate.
    pub fn count_facts_of_predicate(&self, predicate: &Tag) -> Option<usize> {
        self.table_manager.count_rows(predicate)
    }

    /// Count the number of facts of derived predicates.
    pub fn count_facts_of_derived_predicates(&self) -> usize {
        let mut result = 0;

        for predicate in &self.analysis.derived_predicates {
            if let Some(count) = self.count_facts_of_predicate(predicate) {
                result += count;
            }
        }

        result
    }
}
