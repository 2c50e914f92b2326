use crate::error::Result;
use crate::ordering::{PermutationStrategy,PatternCounts};
use crate::sparse::SparseView;

///Row ordering driven by per-column zero counts.
///
///Takes the unused row whose nonzero columns have the smallest total
///zero count, then zeroes the counts of those columns, so later rows
///overlapping them look cheap. The result orders rows, not an
///elimination, and rectangular matrices are accepted.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct GreedyRow;

impl PermutationStrategy for GreedyRow{
    fn get_permutation<M : SparseView>(&self,mat : &M) -> Result<Vec<usize>>{
        let mut counts = PatternCounts::new(mat);
        log::debug!("greedy row: ordering {} rows over {} columns",mat.get_nrows(),mat.get_ncols());
        let mut perm = Vec::<usize>::with_capacity(mat.get_nrows());
        while let Some((k,score)) = counts.cheapest_unused(){
            log::trace!("greedy row: take {} (score {})",k,score);
            counts.take(k,|_| 0);
            perm.push(k);
        }
        Ok(perm)
    }
}

#[cfg(test)]
mod tests {
    use crate::ordering::{PermutationStrategy,GreedyRow};
    use crate::gallery::{laplace1d,random_symmetric};
    use crate::sparse::{CSCSparse,DenseMatrix};
    use crate::utility::is_permutation;

    #[test]
    fn greedy_row_rectangular(){
        //5x3: rows touch columns {0}, {0,1,2}, {}, {2}, {1,2}
        let a = CSCSparse::from_triplets(5,3,&[(0,0,1.0),(1,0,1.0),(1,1,1.0),(1,2,1.0),(3,2,1.0),(4,1,1.0),(4,2,1.0)]);
        //zero counts: col0=3, col1=3, col2=2
        //scores: 3, 8, 0, 2, 5 -> row 2 (empty) first, then row 3
        //col2 -> 0: scores row0=3, row1=6, row4=3 -> row 0
        //col0 -> 0: row1=3, row4=3 -> row 1, then row 4
        let p = GreedyRow.get_permutation(&a).unwrap();
        assert_eq!(p,vec![2,3,0,1,4]);
    }

    #[test]
    fn greedy_row_dense_view(){
        let mut d = DenseMatrix::<f64>::zeros(3,3);
        d.set(0,0,1.0);
        d.set(0,1,1.0);
        d.set(0,2,1.0);
        d.set(1,1,1.0);
        d.set(2,2,1.0);
        //zero counts [2,1,1]: scores row0=4 row1=1 row2=1
        let p = GreedyRow.get_permutation(&d).unwrap();
        assert_eq!(p,vec![1,2,0]);
    }

    #[test]
    fn greedy_row_is_permutation(){
        let a = random_symmetric::<f64>(50,0.08,3);
        let p = GreedyRow.get_permutation(&a).unwrap();
        assert!(is_permutation(&p,50));
        let b = laplace1d::<f64>(17);
        assert!(is_permutation(&GreedyRow.get_permutation(&b).unwrap(),17));
    }
}
